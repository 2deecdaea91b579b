use contracts::domain::bdsp::aggregate::DirectoryFilter;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryState {
    pub filter: DirectoryFilter,
}

pub fn create_state() -> RwSignal<DirectoryState> {
    RwSignal::new(DirectoryState::default())
}
