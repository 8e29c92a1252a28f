//! Book Row Component
//!
//! One book in the explore, liked and search lists.

use leptos::prelude::*;

use crate::models::BookSummary;

/// Cover, title, author, match score and description; `children` holds
/// the row's action button if it has one
#[component]
pub fn BookRow(
    book: BookSummary,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let author = book.author_or_unknown();
    let score = book.score_label();

    view! {
        <div class="book-row" data-book-id=book.book_id.clone()>
            {book.image_url.clone().filter(|url| !url.is_empty()).map(|url| view! {
                <img class="book-row-cover" src=url alt=book.title.clone() />
            })}
            <div class="book-row-body">
                <h4 class="book-row-title">{book.title.clone()}</h4>
                <p class="book-row-author">{author}</p>
                {(!score.is_empty()).then(|| view! { <p class="book-row-score">{score}</p> })}
                <p class="book-row-description">{book.description.clone()}</p>
                {children.map(|c| c())}
            </div>
        </div>
    }
}
