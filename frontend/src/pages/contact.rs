use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::Reveal;
use crate::components::section::PageHeader;
use crate::motion::variants::SectionKind;

struct ContactChannel {
    icon: &'static str,
    label: &'static str,
    href: &'static str,
}

const CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "✉", label: "info@iworld.com", href: "mailto:info@iworld.com" },
    ContactChannel { icon: "☎", label: "+1 (555) 123-4567", href: "tel:+15551234567" },
    ContactChannel { icon: "⌖", label: "123 Innovation Way, Tech City, USA", href: "#" },
];

const SOCIAL: &[(&str, &str)] = &[("💬", "Chat"), ("👤", "Profile"), ("✉", "Newsletter")];

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page contact-page">
            <PageHeader
                title="Contact IWorld"
                lead="We're here to help! Reach out to us using the form below or via the contact information provided."
            />
            <Reveal kind={SectionKind::Contact} id="contact" class="page-section two-column">
                <ContactForm />
                <div class="contact-info">
                    { for CHANNELS.iter().map(|channel| html! {
                        <div class="contact-channel">
                            <span class="channel-icon">{ channel.icon }</span>
                            <a href={channel.href}>{ channel.label }</a>
                        </div>
                    }) }
                </div>
                <div class="social">
                    <h3>{"Follow us on Social Media"}</h3>
                    <div class="option-row">
                        { for SOCIAL.iter().map(|(icon, label)| html! {
                            <a href="#" class="social-link" aria-label={*label}>{ *icon }</a>
                        }) }
                    </div>
                </div>
            </Reveal>
            <style>
                {r#"
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-channel {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .contact-channel a {
                    color: #fff;
                    text-decoration: none;
                }
                .contact-channel a:hover {
                    color: var(--accent);
                }
                .channel-icon {
                    color: var(--primary);
                    font-size: 1.5rem;
                }
                .social-link {
                    font-size: 1.5rem;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
