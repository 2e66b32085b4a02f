// Drawer module - Trigger frame and serial session lifecycle
pub mod frame;
pub mod session;

pub use frame::OPEN_FRAME;
pub use session::DrawerSession;
