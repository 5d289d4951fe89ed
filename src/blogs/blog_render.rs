use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use super::BlogList;
use crate::api::Blog;
use crate::theme;

pub fn render_blog_list(list: &BlogList, frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused {
        theme::blogs::BORDER_FOCUSED
    } else {
        theme::blogs::BORDER_UNFOCUSED
    };

    let title = if list.filter().is_empty() {
        format!(" blogs ({}) ", list.len())
    } else {
        format!(" blogs ({}/{}) ", list.visible_count(), list.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(border_color));

    if list.visible_count() == 0 {
        let message = if list.is_empty() {
            "no blogs".to_string()
        } else {
            format!("no blogs match '{}'", list.filter())
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(theme::blogs::EMPTY),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = list
        .visible_blogs()
        .map(|blog| ListItem::new(blog_text(blog, list.is_expanded(&blog.id))))
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(theme::blogs::SELECTED)
        .highlight_symbol(theme::blogs::SELECTED_INDICATOR);

    let mut state = ListState::default().with_selected(list.selected_index());
    frame.render_stateful_widget(widget, area, &mut state);
}

fn blog_text(blog: &Blog, expanded: bool) -> Text<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(blog.title.clone(), Style::default().fg(theme::blogs::TITLE)),
        Span::raw(" "),
        Span::styled(blog.author.clone(), Style::default().fg(theme::blogs::AUTHOR)),
    ])];

    if expanded {
        lines.push(Line::from(Span::styled(
            format!("  {}", blog.url),
            Style::default().fg(theme::blogs::URL),
        )));
        lines.push(Line::from(Span::styled(
            format!("  likes {}", blog.likes),
            Style::default().fg(theme::blogs::LIKES),
        )));
        if let Some(name) = blog.user.as_ref().and_then(|u| u.display_name()) {
            lines.push(Line::from(Span::styled(
                format!("  added by {}", name),
                Style::default().fg(theme::blogs::DETAIL),
            )));
        }
    }

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BlogUser, UserSummary};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(list: &BlogList, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_blog_list(list, f, f.area(), true))
            .unwrap();
        terminal.backend().to_string()
    }

    fn sample_list() -> BlogList {
        let mut list = BlogList::new();
        list.replace_all(vec![
            Blog {
                id: "1".to_string(),
                title: "React patterns".to_string(),
                author: "Michael Chan".to_string(),
                url: "https://reactpatterns.com/".to_string(),
                likes: 7,
                user: Some(BlogUser::Populated(UserSummary {
                    id: "u1".to_string(),
                    username: "mluukkai".to_string(),
                    name: "Matti Luukkainen".to_string(),
                })),
            },
            Blog {
                id: "2".to_string(),
                title: "Type wars".to_string(),
                author: "Robert C. Martin".to_string(),
                url: "http://blog.cleancoder.com".to_string(),
                likes: 2,
                user: None,
            },
        ]);
        list
    }

    #[test]
    fn test_renders_titles_and_authors() {
        let output = render_to_string(&sample_list(), 80, 12);
        assert!(output.contains("React patterns Michael Chan"));
        assert!(output.contains("Type wars Robert C. Martin"));
        assert!(output.contains("blogs (2)"));
    }

    #[test]
    fn test_collapsed_entries_hide_details() {
        let output = render_to_string(&sample_list(), 80, 12);
        assert!(!output.contains("likes 7"));
        assert!(!output.contains("reactpatterns.com"));
    }

    #[test]
    fn test_expanded_entry_shows_details() {
        let mut list = sample_list();
        list.toggle_details();

        let output = render_to_string(&list, 80, 12);
        assert!(output.contains("https://reactpatterns.com/"));
        assert!(output.contains("likes 7"));
        assert!(output.contains("added by Matti Luukkainen"));
    }

    #[test]
    fn test_empty_list_message() {
        let output = render_to_string(&BlogList::new(), 40, 6);
        assert!(output.contains("no blogs"));
    }

    #[test]
    fn test_filtered_title_and_no_match_message() {
        let mut list = sample_list();
        list.set_filter("type");
        let output = render_to_string(&list, 80, 12);
        assert!(output.contains("blogs (1/2)"));

        list.set_filter("nothing");
        let output = render_to_string(&list, 80, 12);
        assert!(output.contains("no blogs match 'nothing'"));
    }
}
