/// A page shaped like the site's layout: progress bar, top bar with logo and
/// menu toggle, mobile menu, navigation sidebar and an article.
pub fn docs_page(article: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" lang="en">
  <body>
    <div id="progress" class="fixed top-0 h-1"></div>
    <header id="top-bar" class="sticky top-0">
      <a href="/" class="block w-16 h-16 p-4">Logo</a>
      <button id="nav-toggle" type="button">
        <div class="bar"></div>
        <div class="bar"></div>
        <div class="bar"></div>
      </button>
    </header>
    <aside id="mobile-menu" class="fixed -translate-x-full"></aside>
    <nav id="page-nav"></nav>
    <main>
{article}
    </main>
  </body>
</html>"#
    )
}

/// The article from the navigation example: one title, a section, a
/// subsection and an opted-out section.
pub fn title_a_b_c() -> &'static str {
    r#"      <h1>Title</h1>
      <h2>A</h2>
      <p>Body text.</p>
      <h3>B</h3>
      <h2 data-page-nav="false">C</h2>"#
}

pub fn guide_article() -> &'static str {
    r#"      <h1>User Guide</h1>
      <h2>Getting   Started</h2>
      <h3 id="install">Installing the CLI</h3>
      <h3>First <code>run</code></h3>
      <h2>Configuration</h2>
      <h2 data-page-nav="false">Changelog</h2>
      <h2>Configuration</h2>"#
}

/// A page with none of the enhancement targets.
pub fn plain_page() -> &'static str {
    r#"<html><body><main><h1>Plain</h1><h2>Section</h2></main></body></html>"#
}
