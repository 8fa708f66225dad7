use yew::prelude::*;

const TRUST_STATS: [&str; 3] = [
    "Trusted by 500+ restaurants and hotels",
    "40 years of commercial kitchen expertise",
    "Serving Saudi Arabia's homeowners and professionals",
];

#[function_component(TrustSection)]
pub fn trust_section() -> Html {
    html! {
        <section class="trust-section">
            <h3 class="trust-heading">{"Partnering with Industry Leaders"}</h3>
            <img
                class="partner-logos"
                src="/assets/partner-logos.png"
                alt="Partner companies including TurboChef, Anets, Vulcan, Hobart, and Rational"
            />

            <div class="trust-grid">
                {
                    for TRUST_STATS.iter().map(|stat| html! {
                        <div key={*stat} class="trust-item">
                            <span class="trust-check">{"✓"}</span>
                            <p>{*stat}</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}
