pub mod camera;
pub mod decoder;
pub mod encoder;
pub mod token;

pub use camera::{BrowserCamera, BrowserCameraSource};
pub use decoder::{QrScanner, ScanCycle, ScanState};
pub use encoder::{QrEncoder, QrImage};
pub use token::{ScannedToken, SessionToken};
