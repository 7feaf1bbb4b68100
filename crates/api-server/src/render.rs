//! HTML rendering for the todo page
//!
//! The pages are small enough to build by hand, so there is no
//! template engine. Task text is escaped before it reaches markup.

use std::fmt::Write;

use todo_core::todo::{Priority, Todo};

const FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
];

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

/// Render the todo page: filter links, the (filtered) list, counts,
/// and the add-task form.
pub fn todo_page(todos: &[Todo], selected: &str, total_count: usize) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Todo List</title>\n</head>\n<body>\n<h1>Todo List</h1>\n",
    );

    let _ = writeln!(
        page,
        "<p class=\"counts\">Showing {} of {} tasks</p>",
        todos.len(),
        total_count
    );

    page.push_str("<nav class=\"filters\">\n");
    for (value, label) in FILTERS {
        let class = if value == selected { " class=\"active\"" } else { "" };
        let _ = writeln!(
            page,
            "<a href=\"/?priority={}\"{}>{}</a>",
            value, class, label
        );
    }
    page.push_str("</nav>\n");

    page.push_str("<ul class=\"todos\">\n");
    for todo in todos {
        let state = if todo.completed { "completed" } else { "open" };
        let _ = writeln!(
            page,
            "<li class=\"todo {} priority-{}\" data-id=\"{}\">{}</li>",
            state,
            priority_label(todo.priority),
            todo.id,
            escape_html(&todo.task)
        );
    }
    page.push_str("</ul>\n");

    page.push_str(
        "<form method=\"post\" action=\"/todos\">\n\
         <input type=\"text\" name=\"task\" maxlength=\"200\" required>\n\
         <select name=\"priority\">\n\
         <option value=\"low\">Low</option>\n\
         <option value=\"medium\" selected>Medium</option>\n\
         <option value=\"high\">High</option>\n\
         </select>\n\
         <button type=\"submit\">Add Task</button>\n\
         </form>\n</body>\n</html>\n",
    );

    page
}

/// Render the page returned for unmatched routes
pub fn not_found_page() -> String {
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
     <title>Page Not Found</title>\n</head>\n<body>\n\
     <h1>404 - Page Not Found</h1>\n<p><a href=\"/\">Back to the list</a></p>\n\
     </body>\n</html>\n"
        .to_string()
}
