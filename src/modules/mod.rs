pub mod items;

pub use self::items::model::Item;
