/// Context passed to graph nodes during rendering.
///
/// Ambience chains carry no musical state; the only thing a node needs
/// from outside is the engine sample rate.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
}

impl RenderCtx {
    pub fn new(sample_rate: f32) -> Self {
        Self { sample_rate }
    }
}

/// Trait for nodes that support parameter modulation.
pub trait Modulatable: Send {
    type Param: Copy + Send;

    fn get_param(&self, param: Self::Param) -> f32;

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32);
}

/// Core trait for signal-processing graph nodes.
///
/// Sources fill the buffer; processors transform it in place. Nodes
/// must be `Send`: chains are built on the control thread and handed
/// to the realtime render thread.
pub trait SignalNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch).
impl SignalNode for Box<dyn SignalNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }
}
