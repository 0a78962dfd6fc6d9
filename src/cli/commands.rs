use crate::app::{AppContext, NewsError, Result};
use crate::domain::{Article, Category, NewsFilter, ViewState};
use crate::viewmodel::NewsViewModel;

pub async fn headlines(ctx: &AppContext, filter: NewsFilter) -> Result<()> {
    let view_model = ctx.view_model();
    let state = load(&view_model, filter).await;

    match state {
        ViewState::Success(articles) => {
            print!("{}", format_feed(&articles));
            Ok(())
        }
        ViewState::Error(message) => Err(NewsError::Other(message)),
        ViewState::Loading => Err(NewsError::Other("Headlines are still loading".into())),
    }
}

pub async fn read_article(
    ctx: &AppContext,
    filter: NewsFilter,
    index: usize,
    open_in_browser: bool,
) -> Result<()> {
    let view_model = ctx.view_model();
    let state = load(&view_model, filter).await;

    let articles = match state {
        ViewState::Success(articles) => articles,
        ViewState::Error(message) => return Err(NewsError::Other(message)),
        ViewState::Loading => {
            return Err(NewsError::Other("Headlines are still loading".into()))
        }
    };

    let article = pick(&articles, index)?;
    view_model.select_article(article.clone());

    if let Some(selected) = view_model.selected_article() {
        print!("{}", format_detail(&selected));

        if open_in_browser {
            match &selected.url {
                Some(url) => open::that(url)?,
                None => eprintln!("Article has no link to open"),
            }
        }
    }

    view_model.clear_selected_article();
    Ok(())
}

pub fn list_categories() {
    for category in Category::ALL {
        println!("{:<15} {}", category.as_str(), category.label());
    }
}

/// Apply the filter (the view model already started an unfiltered fetch) and wait.
async fn load(view_model: &NewsViewModel, filter: NewsFilter) -> ViewState {
    if !filter.is_empty() {
        view_model.fetch_news(filter);
    }
    view_model.wait_until_settled().await
}

fn pick(articles: &[Article], index: usize) -> Result<&Article> {
    index
        .checked_sub(1)
        .and_then(|i| articles.get(i))
        .ok_or_else(|| {
            NewsError::Other(format!(
                "No headline #{} (the feed has {})",
                index,
                articles.len()
            ))
        })
}

pub fn format_feed(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No headlines\n".to_string();
    }

    let mut out = String::new();
    for (i, article) in articles.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {}\n     {} | {}\n",
            i + 1,
            article.display_title(),
            article.source.name,
            article.display_date()
        ));

        let description = article.display_description();
        if !description.is_empty() {
            out.push_str(&format!("     {}\n", description));
        }
    }
    out
}

pub fn format_detail(article: &Article) -> String {
    let mut out = format!(
        "{}\nBy {} • {}\n",
        article.display_title(),
        article.source.name,
        article.display_date()
    );

    if let Some(author) = &article.author {
        out.push_str(&format!("Author: {}\n", author));
    }

    out.push('\n');
    out.push_str(&article.display_body());
    out.push('\n');

    if let Some(url) = &article.url {
        out.push_str(&format!("\n{}\n", url));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::article::tests::article;
    use crate::repository::tests::{response, FakeApi, Reply};

    #[test]
    fn test_format_feed_lists_in_order() {
        let mut second = article("Second");
        second.description = Some("Details &amp; more".into());
        let out = format_feed(&[article("First"), second]);

        let first_pos = out.find("1. First").unwrap();
        let second_pos = out.find("2. Second").unwrap();
        assert!(first_pos < second_pos);
        assert!(out.contains("Example News | Jan 05, 2024"));
        assert!(out.contains("Details & more"));
    }

    #[test]
    fn test_format_feed_empty() {
        assert_eq!(format_feed(&[]), "No headlines\n");
    }

    #[test]
    fn test_format_detail() {
        let mut a = article("Big story");
        a.author = Some("Jane Doe".into());
        a.content = Some("Everything happened.".into());
        a.published_at = "not-a-date".into();

        let out = format_detail(&a);
        assert!(out.starts_with("Big story\nBy Example News • not-a-date\n"));
        assert!(out.contains("Author: Jane Doe"));
        assert!(out.contains("Everything happened."));
        assert!(out.contains("https://example.com/Big-story"));
    }

    #[test]
    fn test_pick_is_one_based() {
        let articles = vec![article("a"), article("b")];
        assert_eq!(pick(&articles, 1).unwrap().title, "a");
        assert_eq!(pick(&articles, 2).unwrap().title, "b");
        assert!(pick(&articles, 0).is_err());
        assert!(pick(&articles, 3).is_err());
    }

    #[tokio::test]
    async fn test_load_applies_filter_after_initial_fetch() {
        let api = FakeApi::new(vec![
            Reply::Ok(200, Some(response(vec![article("unfiltered")]))),
            Reply::Ok(200, Some(response(vec![article("sports")]))),
        ]);
        let ctx = AppContext::with_api(api.clone(), &Config::default());
        let vm = ctx.view_model();

        let state = load(&vm, NewsFilter::default().with_category(Category::Sports)).await;

        assert_eq!(state, ViewState::Success(vec![article("sports")]));
        assert_eq!(vm.current_filter().category, Some(Category::Sports));
    }

    #[tokio::test]
    async fn test_headlines_surfaces_error_state() {
        let api = FakeApi::new(vec![Reply::Ok(503, None)]);
        let ctx = AppContext::with_api(api, &Config::default());

        let err = headlines(&ctx, NewsFilter::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "API call failed with code: 503");
    }

    #[tokio::test]
    async fn test_read_article_out_of_range() {
        let api = FakeApi::new(vec![Reply::Ok(200, Some(response(vec![article("only")])))]);
        let ctx = AppContext::with_api(api, &Config::default());

        let err = read_article(&ctx, NewsFilter::default(), 5, false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No headline #5"));
    }
}
