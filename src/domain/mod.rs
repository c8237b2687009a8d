pub mod amount;
pub mod merchant;
pub mod pix;
pub mod ports;
