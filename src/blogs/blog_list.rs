use std::collections::HashSet;

use crate::api::Blog;

#[derive(Debug, Default)]
pub struct BlogList {
    blogs: Vec<Blog>,
    filter: String,
    /// Indices into `blogs` matching the filter, in display order
    visible: Vec<usize>,
    /// Position in `visible`
    selected: usize,
    expanded: HashSet<String>,
}

impl BlogList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a fresh server listing
    pub fn replace_all(&mut self, blogs: Vec<Blog>) {
        let selected_id = self.selected_id();
        self.blogs = blogs;
        self.sort();
        self.expanded
            .retain(|id| self.blogs.iter().any(|b| &b.id == id));
        self.refresh(selected_id);
    }

    /// Append a newly created entry
    pub fn insert(&mut self, blog: Blog) {
        let selected_id = self.selected_id();
        self.blogs.push(blog);
        self.sort();
        self.refresh(selected_id);
    }

    /// Swap in the server's copy of an entry. Returns false if the id is
    /// not cached.
    pub fn replace(&mut self, blog: Blog) -> bool {
        let selected_id = self.selected_id();
        let Some(slot) = self.blogs.iter_mut().find(|b| b.id == blog.id) else {
            return false;
        };
        *slot = blog;
        self.sort();
        self.refresh(selected_id);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Blog> {
        let position = self.blogs.iter().position(|b| b.id == id)?;
        let removed = self.blogs.remove(position);
        self.expanded.remove(id);

        // Keep the cursor at the same row so it lands on the next entry
        let selected = self.selected;
        self.refresh(None);
        self.selected = selected.min(self.visible.len().saturating_sub(1));
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Blog> {
        self.blogs.iter().find(|b| b.id == id)
    }

    pub fn all(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Show only entries whose title or author contains `filter`,
    /// ignoring case. An empty filter shows everything.
    pub fn set_filter(&mut self, filter: &str) {
        if self.filter == filter {
            return;
        }
        let selected_id = self.selected_id();
        self.filter = filter.to_string();
        self.refresh(selected_id);
    }

    pub fn visible_blogs(&self) -> impl Iterator<Item = &Blog> {
        self.visible.iter().map(|&i| &self.blogs[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.visible.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn selected_blog(&self) -> Option<&Blog> {
        self.visible.get(self.selected).map(|&i| &self.blogs[i])
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    /// Show or hide url, likes and creator for the selected entry
    pub fn toggle_details(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_blog().map(|b| b.id.clone())
    }

    // Stable, so entries with equal likes keep their arrival order
    fn sort(&mut self) {
        self.blogs.sort_by(|a, b| b.likes.cmp(&a.likes));
    }

    fn matches(blog: &Blog, needle: &str) -> bool {
        needle.is_empty()
            || blog.title.to_lowercase().contains(needle)
            || blog.author.to_lowercase().contains(needle)
    }

    /// Recompute the visible rows, following `keep_selected` if it is
    /// still visible and clamping the cursor otherwise
    fn refresh(&mut self, keep_selected: Option<String>) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .blogs
            .iter()
            .enumerate()
            .filter(|(_, b)| Self::matches(b, &needle))
            .map(|(i, _)| i)
            .collect();

        if let Some(id) = keep_selected
            && let Some(pos) = self.visible.iter().position(|&i| self.blogs[i].id == id)
        {
            self.selected = pos;
            return;
        }
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "blog_list_tests.rs"]
mod blog_list_tests;
