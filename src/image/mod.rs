pub mod color;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::color::{ChannelOrder, ColorImage, ColorImageU8, CHANNELS};
pub use self::traits::{ImageView, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
