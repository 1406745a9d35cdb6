// Shared header/footer markup injected into every page.

/// Navbar becomes solid once the page is scrolled past this many pixels.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Graduates,
    Showcase,
    Other,
}

impl Page {
    /// Parse the placeholder's `data-active` attribute.
    pub fn from_data_active(value: &str) -> Self {
        match value {
            "home" => Page::Home,
            "graduates" => Page::Graduates,
            "showcase" => Page::Showcase,
            _ => Page::Other,
        }
    }
}

struct NavLink {
    page: Page,
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        page: Page::Home,
        href: "index.html",
        label: "The Grad Show 26'",
    },
    NavLink {
        page: Page::Graduates,
        href: "graduates.html",
        label: "The Graduates",
    },
    NavLink {
        page: Page::Showcase,
        href: "showcase.html",
        label: "The Showcase",
    },
];

/// Inner HTML of the `<nav class="main-navbar">` element.
pub fn navbar_inner_html(active: Page) -> String {
    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let class = if link.page == active {
                "main-nav-link active"
            } else {
                "main-nav-link"
            };
            format!(r#"<a href="{}" class="{}">{}</a>"#, link.href, class, link.label)
        })
        .collect::<Vec<_>>()
        .join("");
    format!(
        r#"<div class="main-nav-logo"><a href="index.html"><img src="./assets/logoGroup2.svg" alt="2026" class="logo-year"><img src="./assets/logoGroup1.svg" alt="Division of Industrial Design Graduation Show" class="logo-text"></a></div><div class="main-nav-links">{links}</div>"#
    )
}

/// Inner HTML of the `<footer class="main-footer">` element.
pub fn footer_inner_html() -> String {
    let links = NAV_LINKS
        .iter()
        .map(|link| format!(r#"<a href="{}" class="footer-link">{}</a>"#, link.href, link.label))
        .collect::<Vec<_>>()
        .join("");
    format!(
        r#"<div class="footer-links">{links}</div><div class="footer-logo"><img src="./assets/logo2026HorizontalHALF.png" alt="2026"></div>"#
    )
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}
