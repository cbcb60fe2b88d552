use marquee_api_models::{Credits, PersonCredits};
use marquee_gateway::TransportError;
use marquee_test_support::fixtures::{
    credits, movie_details, movie_summary, person, person_cast_credit, person_credits,
    results_page, video,
};
use marquee_test_support::transport::{ScriptedTransport, gateway};

#[tokio::test]
async fn fetch_popular_returns_results() {
    let transport = ScriptedTransport::new();
    transport.respond_json(
        "/movie/popular",
        &results_page(vec![movie_summary(1, "One"), movie_summary(2, "Two")]),
    );
    let client = gateway(transport);

    let movies = client.fetch_popular().await;
    assert_eq!(
        movies.iter().map(|movie| movie.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(client.transport().requests(), vec!["/movie/popular"]);
}

#[tokio::test]
async fn list_operations_fall_back_to_empty() {
    let transport = ScriptedTransport::new();
    transport.fail_status("/movie/popular", 500);
    transport.fail_network("/movie/7/videos");
    transport.respond("/search/movie?query=neo", "not json");
    let client = gateway(transport);

    assert!(client.fetch_popular().await.is_empty());
    assert!(client.fetch_movie_videos(7).await.is_empty());
    assert!(client.search_movies("neo").await.is_empty());
}

#[tokio::test]
async fn details_missing_yields_none() {
    let client = gateway(ScriptedTransport::new());
    assert!(client.fetch_movie_details(404).await.is_none());
    assert_eq!(client.transport().request_count("/movie/404"), 1);
}

#[tokio::test]
async fn details_and_videos_decode() {
    let transport = ScriptedTransport::new();
    transport.respond_json("/movie/603", &movie_details(603, "The Matrix"));
    transport.respond_json(
        "/movie/603/videos",
        &results_page(vec![video("abc", "Official Trailer", "YouTube", "Trailer")]),
    );
    let client = gateway(transport);

    let details = client.fetch_movie_details(603).await;
    assert_eq!(details.map(|details| details.title).as_deref(), Some("The Matrix"));
    let videos = client.fetch_movie_videos(603).await;
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].key, "abc");
}

#[tokio::test]
async fn credits_default_to_empty_cast_and_crew() {
    let transport = ScriptedTransport::new();
    transport.fail_status("/movie/9/credits", 401);
    transport.respond_json("/movie/10/credits", &credits(3));
    let client = gateway(transport);

    assert_eq!(client.fetch_movie_credits(9).await, Credits::default());
    assert_eq!(client.fetch_movie_credits(10).await.cast.len(), 3);
}

#[tokio::test]
async fn search_encodes_query_and_skips_blank_input() {
    let transport = ScriptedTransport::new();
    transport.respond_json(
        "/search/movie?query=the%20matrix",
        &results_page(vec![movie_summary(603, "The Matrix")]),
    );
    let client = gateway(transport);

    assert!(client.search_movies("   ").await.is_empty());
    assert!(client.transport().requests().is_empty());

    let results = client.search_movies(" the matrix ").await;
    assert_eq!(results.len(), 1);
    assert_eq!(
        client.transport().requests(),
        vec!["/search/movie?query=the%20matrix"]
    );
}

#[tokio::test]
async fn person_details_compose_profile_then_credits() {
    let transport = ScriptedTransport::new();
    transport.respond_json("/person/6384", &person(6384, "Keanu Reeves"));
    transport.respond_json(
        "/person/6384/movie_credits",
        &person_credits(vec![person_cast_credit(
            603,
            "The Matrix",
            80.0,
            Some("1999-03-31"),
            true,
        )]),
    );
    let client = gateway(transport);

    let details = client.fetch_person_details(6384).await;
    let details = details.expect("person details should load");
    assert_eq!(details.person.name, "Keanu Reeves");
    assert_eq!(details.credits.cast.len(), 1);
    assert_eq!(
        client.transport().requests(),
        vec!["/person/6384", "/person/6384/movie_credits"]
    );
}

#[tokio::test]
async fn person_details_fail_as_a_unit() {
    let transport = ScriptedTransport::new();
    transport.respond_json("/person/1", &person(1, "Someone"));
    transport.fail_status("/person/1/movie_credits", 500);
    let client = gateway(transport);
    assert!(client.fetch_person_details(1).await.is_none());

    let transport = ScriptedTransport::new();
    transport.fail_network("/person/2");
    transport.respond_json("/person/2/movie_credits", &PersonCredits::default());
    let client = gateway(transport);
    assert!(client.fetch_person_details(2).await.is_none());
    assert_eq!(client.transport().requests(), vec!["/person/2"]);
}

#[tokio::test]
async fn gated_reply_can_fail_late() {
    let transport = ScriptedTransport::new();
    let gate = transport.gate("/movie/popular");
    let client = gateway(transport);

    let pending = client.fetch_popular();
    gate.fail(TransportError::Status { status: 503 });
    assert!(pending.await.is_empty());
}
