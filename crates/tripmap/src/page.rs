//! Index page markup: the date filter form and embedded map frame.
//!
//! The three selects are populated from the option index and reflect the
//! submitted selection. Month and day options are labeled with their full
//! date context but submit only the bare month/day number, so picking
//! "2022-7" filters on July of every year.

use std::fmt::Write;

use crate::filter::DateFilter;
use crate::options::DateOptions;
use crate::pipeline::RenderOutcome;

/// Build the index page for a request.
#[must_use]
pub fn index_page(
    date_options: &DateOptions,
    selected: &DateFilter,
    outcome: RenderOutcome,
) -> String {
    let mut page = String::with_capacity(2048);
    page.push_str(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\" />\n\
           <title>Location Map</title>\n\
         </head>\n\
         <body>\n\
           <h1>Location Map</h1>\n\
           <form method=\"POST\">\n",
    );

    page.push_str("    <label for=\"year\">Year:</label>\n");
    page.push_str("    <select name=\"year\" id=\"year\">\n");
    page.push_str("      <option value=\"\">All</option>\n");
    for &year in &date_options.years {
        let _ = writeln!(
            page,
            "      <option value=\"{year}\"{}>{year}</option>",
            selected_attr(selected.year == Some(year))
        );
    }
    page.push_str("    </select>\n");

    page.push_str("    <label for=\"month\">Month:</label>\n");
    page.push_str("    <select name=\"month\" id=\"month\">\n");
    page.push_str("      <option value=\"\">All</option>\n");
    for &(year, month) in &date_options.months {
        let _ = writeln!(
            page,
            "      <option value=\"{month}\"{}>{year}-{month}</option>",
            selected_attr(selected.month == Some(month))
        );
    }
    page.push_str("    </select>\n");

    page.push_str("    <label for=\"day\">Day:</label>\n");
    page.push_str("    <select name=\"day\" id=\"day\">\n");
    page.push_str("      <option value=\"\">All</option>\n");
    for &(year, month, day) in &date_options.days {
        let _ = writeln!(
            page,
            "      <option value=\"{day}\"{}>{year}-{month}-{day}</option>",
            selected_attr(selected.day == Some(day))
        );
    }
    page.push_str("    </select>\n");

    page.push_str("    <button type=\"submit\">Filter</button>\n  </form>\n");

    if outcome == RenderOutcome::NoData {
        page.push_str(
            "  <p>No locations match the selected date filter; the map was not updated.</p>\n",
        );
    }

    page.push_str(
        "  <iframe src=\"/map.html\" width=\"100%\" height=\"600px\"></iframe>\n\
         </body>\n\
         </html>\n",
    );
    page
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}
