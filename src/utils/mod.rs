pub mod network;
pub mod qrcode;
pub mod validate;
