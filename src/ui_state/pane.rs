#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Search,
    #[default]
    TrackList,
}

impl PartialEq<Pane> for &Pane {
    fn eq(&self, other: &Pane) -> bool {
        std::mem::discriminant(*self) == std::mem::discriminant(other)
    }
}
