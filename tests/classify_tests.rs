use scraper::{Html, Selector};
use spectral::assert_that;

mod classify_extras;

assert_classifications![
    plain_keyword:
        identifier => "talks", priority => "0.8", changefreq => Monthly,
    keyword_is_case_insensitive:
        identifier => "PUBLICATIONS", priority => "0.9", changefreq => Monthly,
    keyword_inside_identifier:
        identifier => "my-skills-list", priority => "0.7", changefreq => Monthly,
    contact_is_yearly:
        identifier => "contact", priority => "0.6", changefreq => Yearly,
    news_is_weekly:
        identifier => "newsletter", priority => "0.8", changefreq => Weekly,
    earlier_keyword_shadows_later:
        identifier => "contact-news", priority => "0.6", changefreq => Yearly,
    about_shadows_publications:
        identifier => "about-publications", priority => "0.9", changefreq => Monthly,
    skills_shadows_blog:
        identifier => "blog-skills", priority => "0.7", changefreq => Monthly,
    substring_false_positive_is_kept:
        identifier => "aboutique", priority => "0.9", changefreq => Monthly,
    unmatched_falls_back:
        identifier => "gallery", priority => "0.7", changefreq => Monthly,
];

#[test]
fn classification_is_deterministic() {
    let document = Html::parse_document(
        r#"<section id="gallery"><div class="work-grid"><p>x</p></div></section>"#,
    );
    let selector = Selector::parse("section").expect("Invalid selector");
    let section = document.select(&selector).next().expect("No section");

    let first = anchormap::classify("gallery", Some(section));
    let second = anchormap::classify("gallery", Some(section));

    assert_that(&first).is_equal_to(second);
    assert_that(&first.priority.to_string()).is_equal_to("0.8".to_owned());
}

#[test]
fn keyword_table_order_is_fixed() {
    let keywords: Vec<&str> = anchormap::classify::KEYWORD_TABLE
        .iter()
        .map(|(keyword, _)| *keyword)
        .collect();

    assert_that(&keywords).is_equal_to(vec![
        "about",
        "about-me",
        "publications",
        "papers",
        "research",
        "talks",
        "presentations",
        "projects",
        "experience",
        "education",
        "skills",
        "tech-stack",
        "contact",
        "activities",
        "academic-activities",
        "awards",
        "blog",
        "news",
    ]);
}
