use crate::graph::node::{RenderCtx, SignalNode};

/*
Serial Signal Chain (Through)
=============================

Connects two nodes in series: the source renders into the buffer, the
processor transforms it in place. This is how every ambience chain is
assembled: noise -> filter (-> modulated filter for ocean).

  Source renders:      [0.5, 0.8, -0.3, ...]
  Processor in place:  [0.2, 0.4, -0.1, ...]
*/

pub struct Through<S, F> {
    source: S,
    processor: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, processor: F) -> Self {
        Self { source, processor }
    }
}

impl<S: SignalNode, F: SignalNode> SignalNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.processor.render_block(out, ctx);
    }
}
