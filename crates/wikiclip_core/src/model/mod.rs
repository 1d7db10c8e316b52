pub mod tiddler;

pub use tiddler::{TabInfo, Tiddler};
