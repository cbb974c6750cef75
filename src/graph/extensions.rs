use crate::graph::{
    modulate::Modulate,
    node::{Modulatable, SignalNode},
    through::Through,
};

pub trait NodeExt: SignalNode + Sized {
    fn through<F: SignalNode>(self, processor: F) -> Through<Self, F> {
        Through::new(self, processor)
    }

    fn modulate<M: SignalNode>(self, lfo: M, param: Self::Param, depth: f32) -> Modulate<Self, M>
    where
        Self: Modulatable,
    {
        Modulate::new(self, lfo, param, depth)
    }
}

impl<T: SignalNode> NodeExt for T {}
