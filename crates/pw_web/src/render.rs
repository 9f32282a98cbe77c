//! HTML for the two pages. Plain string assembly over the view transforms;
//! every interpolated value goes through `escape`.

use pw_core::view::{self, PoliticiansPage, StateGroup};
use pw_core::{Article, Politician, SortMode};

pub const SITE_TITLE: &str = "PoliWatch Hub";
const LOGO_PATH: &str = "/images/logo.png";

pub fn home_page(articles: &[Article]) -> String {
    let (lead, secondary) = view::split_lead(articles);

    let mut main = String::from("<main class=\"main\">\n");
    if let Some(article) = lead {
        main.push_str(&lead_article(article));
    }
    main.push_str("<section class=\"otherarticles\">\n");
    for article in secondary {
        main.push_str(&article_card(article));
    }
    main.push_str("</section>\n");
    main.push_str(SIDEBAR);
    main.push_str("</main>\n");

    page(&main)
}

pub fn politicians_page(state: &PoliticiansPage) -> String {
    let mut main = String::from("<div class=\"container\">\n<h2>Members of Congress</h2>\n");
    main.push_str(
        "<div class=\"sort-controls\">\n\
         <a href=\"/politicians?sort=name\"><button>By Last Name</button></a>\n\
         <a href=\"/politicians?sort=state\"><button>By State</button></a>\n\
         </div>\n",
    );
    match state.sort_mode() {
        SortMode::Name => main.push_str(&flat_table(&state.sorted())),
        SortMode::State => {
            for group in state.grouped() {
                main.push_str(&state_group(&group));
            }
        }
    }
    main.push_str("</div>\n");

    page(&main)
}

fn page(main: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n<meta charset=\"utf-8\"/>\n<title>{}</title>\n</head>\n\
         <body>\n{}{}{}</body>\n\
         </html>\n",
        SITE_TITLE,
        header(),
        NAV,
        main,
    )
}

fn header() -> String {
    format!(
        "<div class=\"header\">\n\
         <img src=\"{}\" alt=\"poliwatch logo\" class=\"logo\"/>\n\
         <button class=\"donation\">Donate</button>\n\
         </div>\n",
        LOGO_PATH,
    )
}

const NAV: &str = "<nav>\n\
    <div class=\"nav-left\">\n\
    <a href=\"/\">News</a>\n\
    <a href=\"/politicians\">Politicians</a>\n\
    <a>Activists</a>\n\
    </div>\n\
    <div class=\"nav-right\">\n<a>Sign In</a>\n</div>\n\
    </nav>\n";

const SIDEBAR: &str = "<div class=\"sidebar\">\n\
    <div class=\"tradebox\">\n\
    <div class=\"tradeheader\">\n<h3>Latest Trades</h3>\n<a class=\"viewall\">View All</a>\n</div>\n\
    <ul class=\"trades\"></ul>\n\
    </div>\n\
    </div>\n";

fn lead_article(article: &Article) -> String {
    format!(
        "<section class=\"mainarticle\">\n\
         <img src=\"{thumbnail}\" alt=\"{title}\"/>\n\
         <div class=\"description\">\n\
         <h2><a href=\"{link}\" target=\"_blank\">{title}</a></h2>\n\
         <p>{snippet}</p>\n\
         <span class=\"source\">Source: {source}</span>\n\
         </div>\n\
         </section>\n",
        thumbnail = escape(&article.thumbnail),
        title = escape(&article.title),
        link = escape(&article.link),
        snippet = escape(article.snippet.as_deref().unwrap_or("")),
        source = escape(&article.source),
    )
}

fn article_card(article: &Article) -> String {
    format!(
        "<article class=\"article\">\n\
         <img src=\"{thumbnail}\" alt=\"{title}\"/>\n\
         <div class=\"text\">\n\
         <h3><a href=\"{link}\">{title}</a></h3>\n\
         <p>{snippet}</p>\n\
         </div>\n\
         </article>\n",
        thumbnail = escape(&article.thumbnail),
        title = escape(&article.title),
        link = escape(&article.link),
        snippet = escape(article.snippet.as_deref().unwrap_or("")),
    )
}

fn flat_table(politicians: &[Politician]) -> String {
    let mut table = String::from(
        "<table class=\"table\">\n\
         <thead>\n<tr><th>Name</th><th>State</th><th>Party</th></tr>\n</thead>\n\
         <tbody>\n",
    );
    for p in politicians {
        table.push_str(&format!(
            "<tr class=\"row\" onclick=\"window.open('{}', '_blank')\">\
             <td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&p.url),
            escape(&p.name),
            escape(&p.state),
            escape(&p.party),
        ));
    }
    table.push_str("</tbody>\n</table>\n");
    table
}

fn state_group(group: &StateGroup) -> String {
    let mut out = format!(
        "<div class=\"state-group\">\n\
         <h4 class=\"state-header\">{}</h4>\n\
         <table class=\"table\">\n\
         <thead>\n<tr><th>District</th><th>Name</th><th>State</th><th>Party</th></tr>\n</thead>\n\
         <tbody>\n",
        escape(&group.state.to_uppercase()),
    );
    for p in &group.members {
        out.push_str(&format!(
            "<tr class=\"row\" onclick=\"window.open('{}', '_blank')\">\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&p.url),
            p.district,
            escape(&p.name),
            escape(&p.state),
            escape(&p.party),
        ));
    }
    out.push_str("</tbody>\n</table>\n</div>\n");
    out
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::view::PoliticiansPage;

    fn articles(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| Article {
                title: format!("Article {}", i),
                link: format!("https://example.com/{}", i),
                snippet: Some(format!("Snippet {}", i)),
                source: "Example Wire".to_string(),
                thumbnail: "/images/default.jpg".to_string(),
            })
            .collect()
    }

    fn politician(id: i64, name: &str, state: &str, district: u32) -> Politician {
        Politician {
            id,
            name: name.to_string(),
            state: state.to_string(),
            party: "Independent".to_string(),
            district,
            url: format!("https://example.com/member/{}", id),
        }
    }

    #[test]
    fn test_home_page_windowing() {
        for (count, leads, cards) in [(0, 0, 0), (1, 1, 0), (4, 1, 3), (10, 1, 3)] {
            let html = home_page(&articles(count));
            assert_eq!(html.matches("class=\"mainarticle\"").count(), leads);
            assert_eq!(html.matches("class=\"article\"").count(), cards);
        }
    }

    #[test]
    fn test_home_page_keeps_received_order() {
        let html = home_page(&articles(5));
        let first = html.find("Article 1").unwrap();
        let second = html.find("Article 2").unwrap();
        let third = html.find("Article 3").unwrap();
        assert!(first < second && second < third);
        assert!(!html.contains("Article 4"));
    }

    #[test]
    fn test_home_page_always_renders_sidebar() {
        let html = home_page(&[]);
        assert!(html.contains("Latest Trades"));
    }

    #[test]
    fn test_flat_table_for_empty_list_has_no_rows() {
        let page = PoliticiansPage::new();
        let html = politicians_page(&page);
        assert!(html.contains("<table"));
        assert_eq!(html.matches("<tr class=\"row\"").count(), 0);
    }

    #[test]
    fn test_grouped_view_renders_one_table_per_state() {
        let mut page = PoliticiansPage::new();
        page.load(vec![
            politician(1, "A", "ca", 5),
            politician(2, "B", "ca", 1),
            politician(3, "C", "tx", 2),
        ]);
        page.set_sort_mode(SortMode::State);

        let html = politicians_page(&page);
        assert_eq!(html.matches("class=\"state-group\"").count(), 2);
        assert!(html.contains("<h4 class=\"state-header\">CA</h4>"));
        assert!(html.contains("<h4 class=\"state-header\">TX</h4>"));

        let district_one = html.find("<td>1</td>").unwrap();
        let district_five = html.find("<td>5</td>").unwrap();
        assert!(district_one < district_five);
    }

    #[test]
    fn test_row_click_opens_profile_url() {
        let mut page = PoliticiansPage::new();
        page.load(vec![politician(1, "A", "CA", 5)]);

        let html = politicians_page(&page);
        assert!(html.contains("window.open('https://example.com/member/1', '_blank')"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let list = vec![Article {
            title: "<script>alert(1)</script>".to_string(),
            link: "https://example.com/a?x=1&y=2".to_string(),
            snippet: None,
            source: "A & B".to_string(),
            thumbnail: "/images/default.jpg".to_string(),
        }];
        let html = home_page(&list);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("https://example.com/a?x=1&amp;y=2"));
    }
}
