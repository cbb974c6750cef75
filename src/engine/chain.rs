use crate::engine::ambience::Ambience;
use crate::graph::{
    extensions::NodeExt,
    filter::{FilterNode, FilterParam},
    lfo::LfoNode,
    noise::NoiseNode,
    SignalNode,
};
use crate::NOISE_LOOP_SECONDS;

/// Build a fresh synthesis chain for one ambience.
///
/// Every call allocates a new noise loop and filter state; nothing is
/// shared with previous instances of the same kind. The shape comes
/// entirely from `Ambience::chain_spec`, so a rebuilt chain is always
/// configured from the constant table.
pub fn build_chain(kind: Ambience, sample_rate: f32) -> Box<dyn SignalNode> {
    let noise = NoiseNode::looping(NOISE_LOOP_SECONDS, sample_rate);

    let Some(shape) = kind.chain_spec().shape else {
        return Box::new(noise);
    };

    let filter = FilterNode::new(shape.response, shape.cutoff_hz, shape.resonance);

    match shape.swell {
        None => Box::new(noise.through(filter)),
        Some(swell) => Box::new(noise.through(filter.modulate(
            LfoNode::sine(swell.rate_hz),
            FilterParam::Cutoff,
            swell.depth_hz,
        ))),
    }
}
