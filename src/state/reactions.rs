/// Like/dislike on the detail screen. Local only; never both set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reactions {
    pub liked: bool,
    pub disliked: bool,
}

impl Reactions {
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        self.disliked = false;
    }

    pub fn toggle_dislike(&mut self) {
        self.disliked = !self.disliked;
        self.liked = false;
    }
}
