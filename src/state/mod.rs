// ============================================================================
// STATE MODULE - Estado reactivo con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;

pub use reactivity::*;
