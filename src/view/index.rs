use maud::{Markup, html};

use crate::HTMX_PATH;

/// Page shell. The scoreboard itself is swapped in by htmx polling, so the
/// browser always shows the latest fully-processed snapshot.
#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="/static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) {}
        }
        body {
            div id="scoreboard"
                hx-get="/scoreboard"
                hx-trigger="load, every 1s"
                hx-swap="innerHTML" {
                img alt="Lade Scoreboard..." class="htmx-indicator" width="150"
                    src="https://htmx.org//img/bars.svg";
            }
        }
    }
}
