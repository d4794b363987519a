//! HTML/JS fragments for the four regions of the samples page.
//!
//! Values are inserted verbatim. Titles and bodies come from the wiki and are
//! expected to be safe markup already.

use crate::model::Sample;
use crate::parser::samples::categories;

/// One `<li>` filter entry per category that has at least one sample.
pub fn category_menu(samples: &[Sample]) -> String {
    let mut out = String::from("\n");
    for c in categories(samples) {
        out.push_str(&format!(
            "            <li data-value=\"{}\"><a href=\"#\">{}</a></li>\n",
            c.id, c.name
        ));
    }
    out
}

pub fn thumbnails(samples: &[Sample]) -> String {
    let mut out = String::from("\n");
    for s in samples {
        out.push_str(&format!(
            "\n            <li data-type=\"{cat}\" data-id=\"id-{idx}\" class=\"sample-app\">\n              <a href=\"#\" id=\"thumb-{idx}\"><h2>{title}</h2><img src=\"{img}\" alt=\"{title}\"></a>\n            </li>\n",
            cat = s.category_id(),
            idx = s.index,
            img = s.image.as_deref().unwrap_or(""),
            title = s.title,
        ));
    }
    out
}

/// Hidden containers holding each sample's description markup.
pub fn text_blocks(samples: &[Sample]) -> String {
    let mut out = String::from("\n");
    for s in samples {
        out.push_str(&format!(
            "            <div id=\"text-{}\" class=\"hidden\">{}</div>\n",
            s.index, s.body_text
        ));
    }
    out
}

/// Click handlers that open a dialog with the sample text and a download button.
pub fn behavior_script(samples: &[Sample]) -> String {
    let mut out = String::from("\n");
    for s in samples {
        out.push_str(&format!(
            r#"
            $('#thumb-{idx}').off().on('click', function () {{
                var content = $('#text-{idx}').clone(false);
                $(content).removeClass('hidden');
                bootbox.dialog({{ message: content, title: '{title}', buttons: {{
                        "Download": function() {{ window.location.assign('{zip}'); }}
                    }}}});
            }});
"#,
            idx = s.index,
            title = s.title,
            zip = s.zip_url.as_deref().unwrap_or(""),
        ));
    }
    out
}

// ── Tests ──
