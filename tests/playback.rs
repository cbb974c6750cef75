//! End-to-end behavior of the playback state machine, volume
//! contract and suspension, all against an offline engine.

use haven_dsp::dsp::filter::FilterResponse;
use haven_dsp::engine::{Ambience, Engine, EngineError};
use haven_dsp::io::OfflineSink;

const SAMPLE_RATE: f32 = 48_000.0;

fn engine() -> Engine {
    Engine::offline(SAMPLE_RATE)
}

#[test]
fn play_then_stop_returns_to_stopped() {
    let mut engine = engine();

    for kind in Ambience::ALL {
        engine.play(kind).unwrap();
        assert!(engine.is_playing(kind), "{kind} did not start");
        assert!(engine.active_spec(kind).is_some());

        engine.stop(kind);
        assert!(!engine.is_playing(kind), "{kind} did not stop");
        assert!(
            engine.active_spec(kind).is_none(),
            "{kind} kept its chain after stop"
        );

        // Stopping again is a no-op, not an error.
        engine.stop(kind);
        assert!(!engine.is_playing(kind));
    }
}

#[test]
fn volume_round_trips_and_rejects_out_of_range() {
    let mut engine = engine();
    let kind = Ambience::Forest;

    for volume in [0.0, 0.25, 0.5, 1.0] {
        engine.set_volume(kind, volume).unwrap();
        assert_eq!(engine.volume(kind), volume);
    }

    engine.set_volume(kind, 0.6).unwrap();
    for bad in [-0.1, 1.5, f32::NAN, f32::INFINITY] {
        let err = engine.set_volume(kind, bad).unwrap_err();
        assert!(matches!(err, EngineError::InvalidVolume(_)));
        assert_eq!(engine.volume(kind), 0.6, "prior volume was not retained");
    }
}

#[test]
fn volume_applies_without_playing() {
    let mut engine = engine();
    assert!(!engine.is_playing(Ambience::Cafe));

    engine.set_volume(Ambience::Cafe, 0.9).unwrap();
    assert_eq!(engine.volume(Ambience::Cafe), 0.9);
    assert!(!engine.is_playing(Ambience::Cafe));
}

#[test]
fn master_volume_contract_matches_track_volume() {
    let mut engine = engine();
    assert_eq!(engine.master_volume(), 0.7);

    engine.set_master_volume(0.4).unwrap();
    assert_eq!(engine.master_volume(), 0.4);

    let err = engine.set_master_volume(2.0).unwrap_err();
    assert!(matches!(err, EngineError::InvalidVolume(_)));
    assert_eq!(engine.master_volume(), 0.4);
}

#[test]
fn stop_all_reaches_every_track() {
    let mut engine = engine();

    for kind in [Ambience::Rain, Ambience::Ocean, Ambience::Whitenoise] {
        engine.play(kind).unwrap();
    }

    engine.stop_all();

    for kind in Ambience::ALL {
        assert!(!engine.is_playing(kind), "{kind} survived stop_all");
    }
}

#[test]
fn ocean_swell_rate_is_stable_across_cycles() {
    let mut engine = engine();

    for _ in 0..10 {
        engine.play(Ambience::Ocean).unwrap();
        let spec = engine.active_spec(Ambience::Ocean).unwrap();
        let swell = spec.shape.unwrap().swell.unwrap();
        assert_eq!(swell.rate_hz, 0.1, "swell rate drifted across cycles");
        engine.stop(Ambience::Ocean);
    }
}

#[test]
fn suspension_does_not_change_play_state() {
    let mut engine = engine();

    engine.play(Ambience::Rain).unwrap();
    engine.play(Ambience::Fireplace).unwrap();

    engine.suspend().unwrap();
    assert!(engine.is_suspended());
    assert!(engine.is_playing(Ambience::Rain));
    assert!(engine.is_playing(Ambience::Fireplace));
    assert!(!engine.is_playing(Ambience::Cafe));

    engine.resume().unwrap();
    assert!(!engine.is_suspended());
    assert!(engine.is_playing(Ambience::Rain));
    assert!(engine.is_playing(Ambience::Fireplace));
}

#[test]
fn toggle_resumes_a_suspended_output_first() {
    let mut engine = engine();

    engine.suspend().unwrap();
    assert!(engine.is_suspended());

    let playing = engine.toggle(Ambience::Cafe).unwrap();
    assert!(playing);
    assert!(!engine.is_suspended(), "toggle left the output suspended");
    assert!(engine.is_playing(Ambience::Cafe));

    let playing = engine.toggle(Ambience::Cafe).unwrap();
    assert!(!playing);
    assert!(!engine.is_playing(Ambience::Cafe));
}

#[test]
fn unavailable_output_rejects_play_without_state_change() {
    let mut engine = Engine::with_sink(SAMPLE_RATE, Box::new(OfflineSink::unavailable()));

    let err = engine.play(Ambience::Rain).unwrap_err();
    assert!(matches!(err, EngineError::AudioUnavailable(_)));
    assert!(!engine.is_playing(Ambience::Rain));

    let err = engine.toggle(Ambience::Rain).unwrap_err();
    assert!(matches!(err, EngineError::AudioUnavailable(_)));
    assert!(!engine.is_playing(Ambience::Rain));

    // Control state stays usable: volumes still apply.
    engine.set_volume(Ambience::Rain, 0.3).unwrap();
    assert_eq!(engine.volume(Ambience::Rain), 0.3);
}

#[test]
fn rain_scenario() {
    let mut engine = engine();

    engine.play(Ambience::Rain).unwrap();
    assert!(engine.is_playing(Ambience::Rain));

    let shape = engine.active_spec(Ambience::Rain).unwrap().shape.unwrap();
    assert_eq!(shape.response, FilterResponse::BandPass);
    assert_eq!(shape.cutoff_hz, 1000.0);
    assert_eq!(shape.resonance, 0.5);
    assert!(shape.swell.is_none());

    engine.set_volume(Ambience::Rain, 0.2).unwrap();
    assert_eq!(engine.volume(Ambience::Rain), 0.2);

    engine.stop(Ambience::Rain);
    assert!(!engine.is_playing(Ambience::Rain));
    assert!(engine.active_spec(Ambience::Rain).is_none());
}

#[test]
fn unknown_names_are_rejected_at_the_boundary() {
    let err = "vaporwave".parse::<Ambience>().unwrap_err();
    assert!(matches!(err, EngineError::UnknownAmbience(_)));

    for kind in Ambience::ALL {
        assert_eq!(kind.name().parse::<Ambience>().unwrap(), kind);
    }
}

#[test]
fn offline_engine_renders_the_mix() {
    let mut engine = engine();
    engine.play(Ambience::Whitenoise).unwrap();
    engine.set_volume(Ambience::Whitenoise, 1.0).unwrap();
    engine.set_master_volume(1.0).unwrap();

    let mixer = engine.mixer();
    let mut buffer = vec![0.0f32; 1024];
    mixer.lock().unwrap().render_block(&mut buffer);

    assert!(buffer.iter().any(|&s| s != 0.0));
    assert!(buffer.iter().all(|&s| (-1.0..=1.0).contains(&s)));
}
