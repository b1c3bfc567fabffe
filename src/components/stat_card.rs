use leptos::prelude::*;

/// Single number with a caption
#[component]
pub fn StatCard(
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    /// Colour accent class suffix
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-{}", tone)>
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
