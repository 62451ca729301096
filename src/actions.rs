//! User actions dispatched by the event loop.

#[derive(Clone, Debug)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    ClearQuery,
    ClearCategory,

    SelectUp,
    SelectDown,
    CopySelected,

    /// Toggle a category filter: selecting the active one clears it.
    SetCategory(String),
    CycleCategoryForward,
    CycleCategoryBack,
}
