use campaign_common::{format_display_date, html_escape, Filter, UpdateRecord, UPDATES};

pub const EMPTY_STATE_HTML: &str = r#"<div class="card"><h3>No updates yet</h3><p class="muted">Check back soon for campaign news and events.</p></div>"#;

/// Records matching `filter`, in content order.
pub fn select_updates(records: &[UpdateRecord], filter: Filter) -> Vec<&UpdateRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Render the updates list contents for `filter` from the built-in content store.
pub fn render_updates(filter: Filter) -> String {
    render_records(&select_updates(UPDATES, filter))
}

/// Render a chip selection. `None` is a category with no records.
pub fn render_selection(filter: Option<Filter>) -> String {
    match filter {
        Some(filter) => render_updates(filter),
        None => EMPTY_STATE_HTML.to_string(),
    }
}

pub fn render_records(records: &[&UpdateRecord]) -> String {
    if records.is_empty() {
        return EMPTY_STATE_HTML.to_string();
    }

    records
        .iter()
        .map(|r| render_update(r))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_update(update: &UpdateRecord) -> String {
    let title = html_escape(update.title);
    format!(
        r##"<article class="update" data-type="{kind}">
    <span class="badge {kind}">{badge}</span>
    <h3>{title}</h3>
    <div class="update-meta">
        <span>{date}</span>
        <span>•</span>
        <span>{location}</span>
    </div>
    <p>{summary}</p>
    <a href="#contact" aria-label="Contact the team about {title}">Learn more</a>
</article>"##,
        kind = update.kind.as_str(),
        badge = update.kind.badge_label(),
        date = html_escape(&format_display_date(update.date)),
        location = html_escape(update.location),
        summary = html_escape(update.summary),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_common::UpdateKind;

    fn hostile() -> UpdateRecord {
        UpdateRecord {
            id: "x1",
            kind: UpdateKind::Field,
            title: r#"<script>alert("hi")</script>"#,
            date: "not-a-date & <b>",
            location: "O'Brien's <farm>",
            summary: "Tea & \"coffee\"",
        }
    }

    #[test]
    fn test_select_preserves_order() {
        let ids: Vec<_> = select_updates(UPDATES, Filter::Only(UpdateKind::Events))
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["u1", "u5"]);
    }

    #[test]
    fn test_all_selects_everything() {
        assert_eq!(select_updates(UPDATES, Filter::All).len(), UPDATES.len());
    }

    #[test]
    fn test_empty_selection_renders_empty_state() {
        let html = render_records(&[]);
        assert_eq!(html, EMPTY_STATE_HTML);
        assert!(html.contains("No updates yet"));
    }

    #[test]
    fn test_badge_matches_record_type() {
        let html = render_update(&UPDATES[2]);
        assert!(html.contains(r#"data-type="press""#));
        assert!(html.contains(r#"<span class="badge press">PRESS</span>"#));
    }

    #[test]
    fn test_dates_are_formatted() {
        let html = render_update(&UPDATES[0]);
        assert!(html.contains("<span>Feb 14, 2026</span>"));
    }

    #[test]
    fn test_record_text_is_escaped() {
        let html = render_update(&hostile());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"));
        assert!(html.contains("O&#039;Brien&#039;s &lt;farm&gt;"));
        assert!(html.contains("Tea &amp; &quot;coffee&quot;"));
        assert!(html.contains("<span>not-a-date &amp; &lt;b&gt;</span>"));
    }

    #[test]
    fn test_unknown_category_renders_empty_state() {
        assert_eq!(render_selection(None), EMPTY_STATE_HTML);
        assert_eq!(
            render_selection(Some(Filter::All)),
            render_updates(Filter::All)
        );
    }

    #[test]
    fn test_learn_more_links_to_contact() {
        let html = render_update(&UPDATES[0]);
        assert!(html.contains(
            r##"<a href="#contact" aria-label="Contact the team about Town-hall forum with youth &amp; first-time voters">Learn more</a>"##
        ));
        assert!(html.ends_with("</article>"));
    }

    #[test]
    fn test_ampersand_in_content_is_escaped() {
        let html = render_updates(Filter::Only(UpdateKind::Events));
        assert!(html.contains("youth &amp; first-time voters"));
    }
}
