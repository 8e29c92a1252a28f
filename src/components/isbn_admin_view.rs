//! Admin ISBN Tool
//!
//! Add books from Open Library by ISBN, and edit or delete catalog entries.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::catalog::{self, normalize_isbn, CatalogForm};
use crate::components::catalog_form::CatalogFormFields;
use crate::context::use_app_context;
use crate::routes;

const ENTER_ISBN_ADD: &str = "Enter or scan ISBN to search Open Library";
const ENTER_ISBN_LOOKUP: &str = "Enter or scan ISBN to look up";
const NOT_IN_OPEN_LIBRARY: &str =
    "Book not found in Open Library. You can try manually entering the details.";
const NOT_IN_DATABASE: &str = "This book hasn't been added yet.";

/// What a section shows below its ISBN input
#[derive(Clone, Debug, PartialEq)]
enum Panel {
    Empty,
    Message(&'static str),
    /// Form loaded for this ISBN
    Editing(String),
}

/// Database section after an update or delete: closed on success,
/// left as it was on failure
fn db_panel_after_write(succeeded: bool, current: Panel) -> Panel {
    if succeeded { Panel::Empty } else { current }
}

fn delete_prompt(isbn: &str) -> String {
    format!("Are you sure you want to delete this book? ({})", isbn)
}

#[component]
pub fn IsbnAdminView() -> impl IntoView {
    let ctx = use_app_context();

    // ========================
    // Add from Open Library
    // ========================

    let add_input = RwSignal::new(String::new());
    let add_panel = RwSignal::new(Panel::Empty);
    let add_form = RwSignal::new(CatalogForm::default());

    let search_open_library = move || {
        let Some(isbn) = normalize_isbn(&add_input.get_untracked()) else {
            browser::alert(ENTER_ISBN_ADD);
            return;
        };
        add_panel.set(Panel::Message("Searching Open Library..."));
        let client = ctx.open_library();
        spawn_local(async move {
            match client.lookup_isbn(&isbn).await {
                Ok(Some(book)) => {
                    tracing::info!("[ISBN] Open Library hit for {}", isbn);
                    add_form.set(CatalogForm::from_book(&book));
                    add_panel.set(Panel::Editing(isbn));
                }
                Ok(None) => add_panel.set(Panel::Message(NOT_IN_OPEN_LIBRARY)),
                Err(e) => {
                    tracing::error!("[ISBN] Open Library lookup for {} failed: {}", isbn, e);
                    add_panel.set(Panel::Message(NOT_IN_OPEN_LIBRARY));
                }
            }
        });
    };

    let add_to_library = move |isbn: String| {
        let book = match add_form.with_untracked(|f| f.to_new_book()) {
            Ok(book) => book,
            Err(message) => {
                browser::alert(message);
                return;
            }
        };
        spawn_local(async move {
            match catalog::save_book(&isbn, &book).await {
                Ok(()) => {
                    browser::alert(&format!("Book \"{}\" added/updated successfully!", book.title));
                    add_panel.set(Panel::Empty);
                    add_input.set(String::new());
                    add_form.set(CatalogForm::default());
                }
                Err(e) => {
                    tracing::error!("[ISBN] save {} failed: {}", isbn, e);
                    browser::alert("Error saving book, check console for rules/network errors.");
                }
            }
        });
    };

    // ========================
    // Database lookup
    // ========================

    let db_input = RwSignal::new(String::new());
    let db_panel = RwSignal::new(Panel::Empty);
    let db_form = RwSignal::new(CatalogForm::default());

    let search_database = move || {
        let Some(isbn) = normalize_isbn(&db_input.get_untracked()) else {
            browser::alert(ENTER_ISBN_LOOKUP);
            return;
        };
        db_panel.set(Panel::Message("Searching database..."));
        spawn_local(async move {
            match catalog::load_book(&isbn).await {
                Ok(Some(book)) => {
                    db_form.set(CatalogForm::from_book(&book));
                    db_panel.set(Panel::Editing(isbn));
                }
                Ok(None) => db_panel.set(Panel::Message(NOT_IN_DATABASE)),
                Err(e) => {
                    tracing::error!("[ISBN] database lookup for {} failed: {}", isbn, e);
                    db_panel.set(Panel::Message(NOT_IN_DATABASE));
                }
            }
        });
    };

    let save_changes = move |isbn: String| {
        let book = db_form.with_untracked(|f| f.to_book());
        spawn_local(async move {
            let result = catalog::update_book(&isbn, &book).await;
            match &result {
                Ok(()) => browser::alert("Book updated successfully!"),
                Err(e) => {
                    tracing::error!("[ISBN] update {} failed: {}", isbn, e);
                    browser::alert("Error updating book");
                }
            }
            db_panel.update(|panel| *panel = db_panel_after_write(result.is_ok(), panel.clone()));
            if result.is_ok() {
                db_input.set(String::new());
            }
        });
    };

    let delete_book = move |isbn: String| {
        if !browser::confirm(&delete_prompt(&isbn)) {
            return;
        }
        spawn_local(async move {
            let result = catalog::delete_book(&isbn).await;
            match &result {
                Ok(()) => browser::alert("Book deleted successfully!"),
                Err(e) => {
                    tracing::error!("[ISBN] delete {} failed: {}", isbn, e);
                    browser::alert("Error deleting book");
                }
            }
            db_panel.update(|panel| *panel = db_panel_after_write(result.is_ok(), panel.clone()));
            if result.is_ok() {
                db_input.set(String::new());
            }
        });
    };

    // ========================
    // Rendering
    // ========================

    let add_section = move || match add_panel.get() {
        Panel::Empty => view! { <div></div> }.into_any(),
        Panel::Message(message) => view! { <p class="status">{message}</p> }.into_any(),
        Panel::Editing(isbn) => {
            let isbn_for_add = isbn.clone();
            view! {
                <div class="book-display">
                    <p class="isbn-label">"ISBN: " {isbn}</p>
                    <CatalogFormFields form=add_form />
                    <button class="btn btn--primary" on:click=move |_| add_to_library(isbn_for_add.clone())>
                        "Add to Library"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    let db_section = move || match db_panel.get() {
        Panel::Empty => view! { <div></div> }.into_any(),
        Panel::Message(message) => view! { <p class="status">{message}</p> }.into_any(),
        Panel::Editing(isbn) => {
            let isbn_for_save = isbn.clone();
            let isbn_for_delete = isbn.clone();
            view! {
                <div class="book-display">
                    <p class="isbn-label">"ISBN: " {isbn}</p>
                    <CatalogFormFields form=db_form />
                    <div class="db-actions">
                        <button class="btn btn--primary" on:click=move |_| save_changes(isbn_for_save.clone())>
                            "Save Changes"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| delete_book(isbn_for_delete.clone())>
                            "Delete Book"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <main class="isbn-page">
            <h1>"Library Admin"</h1>

            <section class="isbn-section" id="addSection">
                <h2>"Add Book"</h2>
                <div class="search-row">
                    <input
                        type="text"
                        id="isbnInput"
                        placeholder="Enter or scan ISBN"
                        prop:value=move || add_input.get()
                        on:input=move |ev| add_input.set(event_target_value(&ev))
                        on:keypress=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                search_open_library();
                            }
                        }
                    />
                    <button class="btn" id="searchBtn" on:click=move |_| search_open_library()>
                        "Search Open Library"
                    </button>
                </div>
                <div id="bookDisplay">{add_section}</div>
            </section>

            <section class="isbn-section" id="dbSection">
                <h2>"Search Database"</h2>
                <div class="search-row">
                    <input
                        type="text"
                        id="dbIsbnInput"
                        placeholder="Enter or scan ISBN"
                        prop:value=move || db_input.get()
                        on:input=move |ev| db_input.set(event_target_value(&ev))
                        on:keypress=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                search_database();
                            }
                        }
                    />
                    <button class="btn" id="dbSearchBtn" on:click=move |_| search_database()>
                        "Search Database"
                    </button>
                </div>
                <div id="dbBookDisplay">{db_section}</div>
            </section>

            <button class="btn btn--link" id="backToLogin" on:click=move |_| browser::navigate(routes::LOGIN)>
                "Back to login"
            </button>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_write_closes_database_panel() {
        let editing = Panel::Editing("9780141439518".to_string());
        assert_eq!(db_panel_after_write(true, editing.clone()), Panel::Empty);
        assert_eq!(db_panel_after_write(false, editing.clone()), editing);
    }

    #[test]
    fn test_delete_prompt_names_isbn() {
        assert_eq!(
            delete_prompt("9780141439518"),
            "Are you sure you want to delete this book? (9780141439518)"
        );
    }
}
