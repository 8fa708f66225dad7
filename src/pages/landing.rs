use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::footer::FooterSection;
use crate::components::hero::Hero;
use crate::components::lead_form::LeadCaptureForm;
use crate::components::trust::TrustSection;

const PAGE_TITLE: &str = "Free Commercial Kitchen Equipment Guides | Stovia";
const PAGE_DESCRIPTION: &str = "Download free expert guides for commercial kitchen equipment. \
    Get professional insights on ovens, refrigeration, coffee makers, and more. \
    Trusted by 500+ restaurants in Saudi Arabia.";

fn scroll_to_form() {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("lead-form"));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(PAGE_TITLE);
                    if let Ok(Some(meta)) = document.query_selector("meta[name='description']") {
                        let _ = meta.set_attribute("content", PAGE_DESCRIPTION);
                    }
                }
                || ()
            },
            (),
        );
    }

    let scroll = Callback::from(|_: ()| scroll_to_form());

    html! {
        <main class="landing-page">
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #141414;
                    color: #f5f5f5;
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                }
                .landing-page h1, .landing-page h2, .landing-page h3 {
                    margin: 0 0 1rem;
                }
                .accent {
                    color: #e8762d;
                }

                /* Hero */
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1rem;
                    position: relative;
                    background: radial-gradient(circle at 50% 30%, #2b2018 0%, #141414 70%);
                }
                .hero-logo {
                    height: 4.5rem;
                    margin-bottom: 3rem;
                }
                .hero-headline {
                    font-size: 3rem;
                    font-weight: 700;
                    max-width: 60rem;
                    line-height: 1.2;
                    text-shadow: 0 2px 12px rgba(0, 0, 0, 0.5);
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: rgba(245, 245, 245, 0.7);
                    max-width: 48rem;
                    margin-bottom: 1rem;
                }
                .rotating-words {
                    position: relative;
                    display: inline-block;
                    height: 1.8rem;
                    min-width: 16rem;
                    overflow: hidden;
                    vertical-align: bottom;
                }
                .rotating-word {
                    position: absolute;
                    left: 0;
                    right: 0;
                    opacity: 0;
                    transform: translateY(100%);
                    transition: all 0.5s ease;
                    color: #e8762d;
                    font-weight: 600;
                }
                .rotating-word.active {
                    opacity: 1;
                    transform: translateY(0);
                }
                .cta-button {
                    background: #e8762d;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.2s ease;
                }
                .cta-button:hover {
                    background: #d0651f;
                    transform: translateY(-1px);
                }
                .cta-button:disabled {
                    background: #7a4a24;
                    cursor: not-allowed;
                    transform: none;
                }
                .cta-button.secondary {
                    background: transparent;
                    border: 1px solid #e8762d;
                    color: #e8762d;
                }
                .cta-chevron {
                    margin-left: 0.5rem;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #e8762d;
                    font-size: 1.5rem;
                    animation: bounce 1.5s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 0.5rem); }
                }

                /* Lead form section */
                .lead-section {
                    padding: 5rem 1rem;
                }
                .lead-columns {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .free-badge {
                    display: inline-block;
                    background: rgba(232, 118, 45, 0.15);
                    color: #e8762d;
                    border: 1px solid rgba(232, 118, 45, 0.4);
                    border-radius: 999px;
                    padding: 0.4rem 1rem;
                    font-size: 0.85rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    margin-bottom: 1.5rem;
                }
                .lead-intro {
                    color: rgba(245, 245, 245, 0.7);
                    font-size: 1.1rem;
                    margin-bottom: 1.5rem;
                }
                .notice-box {
                    border-radius: 8px;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    font-size: 0.95rem;
                }
                .notice-box.scarcity {
                    background: rgba(220, 53, 69, 0.12);
                    border: 1px solid rgba(220, 53, 69, 0.4);
                }
                .notice-box.urgency {
                    background: rgba(255, 193, 7, 0.1);
                    border: 1px solid rgba(255, 193, 7, 0.35);
                }
                .countdown-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(232, 118, 45, 0.25);
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-top: 1.5rem;
                }
                .countdown-title {
                    color: #e8762d;
                    font-size: 1.1rem;
                }
                .countdown-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    text-align: center;
                }
                .countdown-value {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #e8762d;
                }
                .countdown-label {
                    font-size: 0.85rem;
                    color: rgba(245, 245, 245, 0.6);
                }

                /* Form card */
                .lead-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(232, 118, 45, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .lead-card-title {
                    text-align: center;
                    font-size: 1.6rem;
                }
                .form-notice {
                    border-radius: 8px;
                    padding: 1rem;
                    margin-bottom: 1.25rem;
                    font-size: 0.95rem;
                }
                .form-notice.success {
                    background: rgba(40, 167, 69, 0.12);
                    border: 1px solid rgba(40, 167, 69, 0.5);
                    color: #7ed492;
                }
                .form-notice.error {
                    background: rgba(220, 53, 69, 0.12);
                    border: 1px solid rgba(220, 53, 69, 0.5);
                    color: #f08a95;
                }
                .form-group {
                    margin-bottom: 1.25rem;
                }
                .form-group label {
                    display: block;
                    font-weight: 500;
                    margin-bottom: 0.4rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .landing-page input,
                .landing-page select {
                    width: 100%;
                    box-sizing: border-box;
                    background: rgba(20, 20, 20, 0.8);
                    border: 1px solid rgba(245, 245, 245, 0.2);
                    border-radius: 8px;
                    color: #f5f5f5;
                    padding: 0.7rem 0.9rem;
                    font-size: 1rem;
                }
                .landing-page input:focus,
                .landing-page select:focus {
                    outline: none;
                    border-color: #e8762d;
                }
                .phone-row {
                    display: flex;
                    gap: 0.75rem;
                }
                .dial-code-select {
                    flex: 0 0 7rem;
                }
                .guide-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    margin-top: 0.5rem;
                }
                .guide-card {
                    border: 1px solid rgba(245, 245, 245, 0.15);
                    border-radius: 10px;
                    padding: 0.75rem;
                    cursor: pointer;
                    transition: border-color 0.2s ease, background 0.2s ease;
                }
                .guide-card:hover {
                    border-color: rgba(232, 118, 45, 0.6);
                }
                .guide-card.selected {
                    border-color: #e8762d;
                    background: rgba(232, 118, 45, 0.1);
                }
                .guide-card img {
                    width: 100%;
                    height: 6rem;
                    object-fit: cover;
                    border-radius: 6px;
                    margin-bottom: 0.5rem;
                }
                .guide-card p {
                    font-size: 0.85rem;
                    font-weight: 500;
                    text-align: center;
                    margin: 0;
                }
                .field-error {
                    color: #f08a95;
                    font-size: 0.85rem;
                    margin: 0.35rem 0 0;
                }
                .submit-button {
                    width: 100%;
                }

                /* Trust */
                .trust-section {
                    padding: 5rem 1rem;
                    text-align: center;
                    background: rgba(245, 245, 245, 0.03);
                }
                .trust-heading {
                    color: rgba(245, 245, 245, 0.7);
                    font-weight: 500;
                }
                .partner-logos {
                    height: 5.5rem;
                    opacity: 0.7;
                    transition: opacity 0.3s ease;
                    margin-bottom: 3rem;
                }
                .partner-logos:hover {
                    opacity: 1;
                }
                .trust-grid {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .trust-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    text-align: left;
                    background: rgba(30, 30, 30, 0.5);
                    border: 1px solid rgba(232, 118, 45, 0.1);
                    border-radius: 10px;
                    padding: 1.5rem;
                }
                .trust-check {
                    color: #e8762d;
                    font-weight: 700;
                }

                /* Footer */
                .footer-section {
                    padding: 5rem 1rem 2rem;
                    text-align: center;
                    border-top: 1px solid rgba(245, 245, 245, 0.1);
                }
                .footer-headline {
                    font-size: 2.2rem;
                }
                .footer-subtitle {
                    color: rgba(245, 245, 245, 0.7);
                    margin-bottom: 3rem;
                }
                .benefit-grid {
                    max-width: 56rem;
                    margin: 0 auto 3rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .benefit-item {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.6rem;
                    background: rgba(232, 118, 45, 0.05);
                    border: 1px solid rgba(232, 118, 45, 0.2);
                    border-radius: 10px;
                    padding: 1.25rem;
                    font-weight: 600;
                }
                .footer-cta-row {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }
                .footer-bottom {
                    border-top: 1px solid rgba(245, 245, 245, 0.1);
                    padding-top: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 80rem;
                    margin: 0 auto;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }
                .footer-links a {
                    color: rgba(245, 245, 245, 0.6);
                    text-decoration: none;
                    font-size: 0.9rem;
                    transition: color 0.3s ease;
                }
                .footer-links a:hover {
                    color: #e8762d;
                }
                .footer-copyright {
                    color: rgba(245, 245, 245, 0.6);
                    font-size: 0.9rem;
                }

                @media (max-width: 900px) {
                    .hero-headline {
                        font-size: 2.1rem;
                    }
                    .lead-columns,
                    .form-row,
                    .trust-grid,
                    .benefit-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-cta-row {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>

            <Hero on_scroll_to_form={scroll.clone()} />
            <LeadCaptureForm />
            <TrustSection />
            <FooterSection on_scroll_to_form={scroll} />
        </main>
    }
}
