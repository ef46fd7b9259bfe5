use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"D"</div>
                <span class="brand-text">"Deck"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item active">
                    <a href="/">
                        <span class="nav-icon">"\u{25A3}"</span>
                        <span>"Gallery"</span>
                    </a>
                </li>
                <li class="nav-item">
                    <a href="/api/v1/cards" rel="external">
                        <span class="nav-icon">"\u{007B}\u{007D}"</span>
                        <span>"Definitions"</span>
                    </a>
                </li>
            </ul>
        </nav>
    }
}
