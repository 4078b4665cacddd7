pub mod base;
pub mod search_box;
pub mod suggestion_list;
pub mod text_edit;
pub mod traits;

pub use search_box::SearchBox;
pub use suggestion_list::{Row, RowPool, SuggestionList};
pub use traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, RenderContext, WidgetAction,
};
