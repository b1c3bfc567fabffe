use leptos::prelude::*;
use mattrix_core::Contact;

/// One contact in the list
#[component]
pub fn ContactCard(contact: Contact) -> impl IntoView {
    let added = contact.added_label();
    let priority = contact.priority;

    view! {
        <div class="contact-card">
            <div class="contact-title">
                <span class="contact-name">{contact.name}</span>
                <span class="contact-priority" title=priority.as_str()>{priority.emoji()}</span>
            </div>
            {contact.company.map(|company| view! { <p class="contact-detail">"🏢 " {company}</p> })}
            {contact.position.map(|position| view! { <p class="contact-detail">"💼 " {position}</p> })}
            {contact.email.map(|email| view! { <p class="contact-detail">"📧 " {email}</p> })}
            <p class="contact-added">"Added: " {added}</p>
        </div>
    }
}
