use crate::domains::carousel::{CarouselView, Indicator, SlideView};

const SKELETON_CARD: &str = "[ ░░░░░░ ]";

/// Draw a view model as a few lines of plain text.
pub fn render_text(view: &CarouselView) -> String {
    if view.is_loading() {
        return vec![SKELETON_CARD; view.skeletons].join(" ");
    }

    let Some(slide) = &view.slide else {
        return String::new();
    };

    let mut out = slide_text(slide);
    out.push_str("  ");
    out.push_str(&indicators(&view.indicators));
    if view.is_paused {
        out.push_str("  (paused)");
    }
    out
}

fn slide_text(slide: &SlideView) -> String {
    let mut out = format!("[{}/{}] {}", slide.position + 1, slide.total, slide.title);
    if slide.popular {
        out.push_str("  * Popular");
    }
    out.push('\n');

    if !slide.overview.is_empty() {
        out.push_str(&format!("  {}\n", slide.overview));
    }
    if let Some(url) = &slide.backdrop_url {
        out.push_str(&format!("  backdrop: {url}\n"));
    }

    let actions: Vec<String> = slide
        .actions
        .iter()
        .map(|action| format!("[{}]", action.label()))
        .collect();
    out.push_str(&format!("  {}  -> {}\n", actions.join(" "), slide.route));
    out
}

fn indicators(indicators: &[Indicator]) -> String {
    indicators
        .iter()
        .map(|indicator| if indicator.active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}
