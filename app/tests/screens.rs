//! List and detail screens against the live mock server, plus stubbed
//! failures for the error alerts.

use mock_server::Team as ServerTeam;
use teams_app::screens::{AlertKind, DetailScreen, ListScreen, Route};
use teams_app::TeamsApi;
use teams_core::IdStrategy;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_team(id: &str, name: &str) -> ServerTeam {
    ServerTeam {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        points: 3,
        goals: 1,
        logo: format!("{}.png", name.to_lowercase()),
    }
}

async fn start_server(teams: Vec<ServerTeam>) -> TeamsApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, teams));
    TeamsApi::new(&format!("http://{addr}/teams"), None).unwrap()
}

// --- list screen ---

#[tokio::test]
async fn refresh_loads_teams_and_last_id() {
    let api = start_server(vec![
        server_team("2", "Boca"),
        server_team("5", "River"),
        server_team("abc", "Racing"),
        server_team("3", "Independiente"),
    ])
    .await;

    let mut screen = ListScreen::new(IdStrategy::Sequential);
    screen.refresh(&api).await;

    assert!(!screen.is_loading());
    assert!(screen.take_alert().is_none());
    assert_eq!(screen.teams().len(), 4);
    assert_eq!(screen.last_id(), 5);
    let rendered = screen.render();
    assert!(rendered.contains("FIFA - Official Teams"));
    assert!(rendered.contains("River"));
}

#[tokio::test]
async fn submit_form_creates_next_sequential_id() {
    let api = start_server(vec![server_team("2", "Boca"), server_team("5", "River")]).await;

    let mut screen = ListScreen::new(IdStrategy::Sequential);
    screen.refresh(&api).await;
    screen.open_form();
    {
        let form = screen.form_mut().unwrap();
        form.name = "Huracan".to_string();
        form.description = "Globo".to_string();
        form.logo = "huracan.png".to_string();
    }

    let id = screen.submit_form(&api).await;
    assert_eq!(id.as_deref(), Some("6"));
    assert!(screen.take_alert().is_none());
    assert!(screen.form().is_none());
    assert_eq!(screen.last_id(), 6);
    assert!(screen.teams().iter().any(|t| t.id == "6" && t.points == 0 && t.goals == 0));
}

#[tokio::test]
async fn submit_form_with_uuid_ids() {
    let api = start_server(Vec::new()).await;

    let mut screen = ListScreen::new(IdStrategy::Uuid);
    screen.refresh(&api).await;
    screen.open_form();
    {
        let form = screen.form_mut().unwrap();
        form.name = "Tigre".to_string();
        form.description = "Matador".to_string();
        form.logo = "tigre.png".to_string();
    }

    let id = screen.submit_form(&api).await.unwrap();
    assert_eq!(id.len(), 36);
    assert_eq!(screen.teams().len(), 1);
    assert_eq!(screen.teams()[0].id, id);
}

#[tokio::test]
async fn submit_form_with_blank_field_sends_nothing() {
    let api = start_server(Vec::new()).await;

    let mut screen = ListScreen::new(IdStrategy::Sequential);
    screen.refresh(&api).await;
    screen.open_form();
    screen.form_mut().unwrap().name = "Only a name".to_string();

    assert!(screen.submit_form(&api).await.is_none());
    let alert = screen.take_alert().unwrap();
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.message, "Please fill in every field.");
    assert!(screen.form().is_some());
    assert!(api.list_teams().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_form_duplicate_id_keeps_form_open() {
    let api = start_server(vec![server_team("1", "Boca")]).await;

    // A screen that never loaded still believes the last id is 0.
    let mut screen = ListScreen::new(IdStrategy::Sequential);
    screen.open_form();
    {
        let form = screen.form_mut().unwrap();
        form.name = "Copy".to_string();
        form.description = "Collides".to_string();
        form.logo = "copy.png".to_string();
    }

    assert!(screen.submit_form(&api).await.is_none());
    assert_eq!(
        screen.take_alert().unwrap().message,
        "Could not add the team. Try again."
    );
    assert!(screen.form().is_some());
}

#[tokio::test]
async fn refresh_failure_shows_empty_list_and_alert() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let api = TeamsApi::new(&format!("{}/teams", server.uri()), None).unwrap();

    let mut screen = ListScreen::new(IdStrategy::Sequential);
    screen.refresh(&api).await;

    assert!(!screen.is_loading());
    assert!(screen.teams().is_empty());
    let alert = screen.take_alert().unwrap();
    assert!(alert.is_error());
    assert_eq!(alert.message, "Could not load the teams. Try again.");
    assert!(screen.render().contains("No teams yet."));
}

// --- detail screen ---

#[tokio::test]
async fn load_shows_team() {
    let api = start_server(vec![server_team("2", "Boca")]).await;

    let mut screen = DetailScreen::new("2");
    screen.load(&api).await;

    assert!(!screen.is_loading());
    assert_eq!(screen.team().unwrap().name, "Boca");
    assert_eq!(screen.new_description(), "Boca description");
    assert!(screen.render().starts_with("Boca\n"));
}

#[tokio::test]
async fn load_missing_team_renders_not_found() {
    let api = start_server(Vec::new()).await;

    let mut screen = DetailScreen::new("404");
    screen.load(&api).await;

    assert!(screen.team().is_none());
    assert!(screen.take_alert().is_none());
    assert_eq!(screen.render(), "Team not found");
}

#[tokio::test]
async fn save_replaces_description_only() {
    let api = start_server(vec![server_team("2", "Boca")]).await;

    let mut screen = DetailScreen::new("2");
    screen.load(&api).await;
    screen.start_editing();
    assert!(screen.is_editing());
    screen.set_description("Azul y oro");
    screen.save(&api).await;

    let alert = screen.take_alert().unwrap();
    assert_eq!(alert.kind, AlertKind::Info);
    assert_eq!(alert.title, "Updated");
    assert!(!screen.is_editing());
    assert_eq!(screen.team().unwrap().description, "Azul y oro");

    let stored = api.get_team("2").await.unwrap().unwrap();
    assert_eq!(stored.description, "Azul y oro");
    assert_eq!(stored.points, 3);
    assert_eq!(stored.goals, 1);
    assert_eq!(stored.logo, "boca.png");
}

#[tokio::test]
async fn cancel_editing_restores_buffer() {
    let api = start_server(vec![server_team("2", "Boca")]).await;

    let mut screen = DetailScreen::new("2");
    screen.load(&api).await;
    screen.start_editing();
    screen.set_description("draft");
    screen.cancel_editing();

    assert!(!screen.is_editing());
    assert_eq!(screen.new_description(), "Boca description");
}

#[tokio::test]
async fn delete_requires_confirmation() {
    let api = start_server(vec![server_team("2", "Boca")]).await;

    let mut screen = DetailScreen::new("2");
    screen.load(&api).await;

    // not armed yet
    assert!(screen.confirm_delete(&api).await.is_none());
    assert!(api.get_team("2").await.unwrap().is_some());

    let prompt = screen.request_delete().unwrap();
    assert_eq!(prompt.title, "Confirm deletion");
    screen.cancel_delete();
    assert!(screen.confirm_delete(&api).await.is_none());
    assert!(api.get_team("2").await.unwrap().is_some());

    screen.request_delete().unwrap();
    let route = screen.confirm_delete(&api).await;
    assert_eq!(route, Some(Route::List));
    assert_eq!(screen.take_alert().unwrap().title, "Deleted");
    assert!(api.get_team("2").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_failure_stays_on_screen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"2","name":"Boca"}"#))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/teams/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let api = TeamsApi::new(&format!("{}/teams", server.uri()), None).unwrap();

    let mut screen = DetailScreen::new("2");
    screen.load(&api).await;
    screen.request_delete().unwrap();

    assert!(screen.confirm_delete(&api).await.is_none());
    assert_eq!(screen.take_alert().unwrap().message, "Could not delete the team");
    assert!(screen.team().is_some());
}

#[tokio::test]
async fn update_failure_keeps_editing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":2,"name":"Boca","description":"old"}"#))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/teams/2"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let api = TeamsApi::new(&format!("{}/teams", server.uri()), None).unwrap();

    let mut screen = DetailScreen::new("2");
    screen.load(&api).await;
    assert_eq!(screen.team().unwrap().id, "2");
    screen.start_editing();
    screen.set_description("new");
    screen.save(&api).await;

    assert_eq!(screen.take_alert().unwrap().message, "Could not update the team");
    assert!(screen.is_editing());
    assert_eq!(screen.team().unwrap().description, "old");
}

#[tokio::test]
async fn blank_id_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;
    let api = TeamsApi::new(&format!("{}/teams", server.uri()), None).unwrap();

    let mut screen = DetailScreen::new("");
    screen.load(&api).await;

    assert!(screen.team().is_none());
    assert_eq!(screen.take_alert().unwrap().message, "Could not load the team");
    assert_eq!(screen.render(), "Team not found");
    assert!(screen.request_delete().is_none());
    assert!(screen.confirm_delete(&api).await.is_none());
}

// --- cross-operation properties ---

#[tokio::test]
async fn create_then_list_contains_id_and_delete_then_get_is_none() {
    let api = start_server(Vec::new()).await;
    let team = teams_core::TeamDraft::new("Gimnasia", "Lobo", "gimnasia.png")
        .into_team("1".to_string())
        .unwrap();

    api.add_team(&team).await.unwrap();
    let teams = api.list_teams().await.unwrap();
    assert!(teams.iter().any(|t| t.id == team.id));

    api.delete_team(&team.id).await.unwrap();
    assert!(api.get_team(&team.id).await.unwrap().is_none());
    assert!(api.delete_team(&team.id).await.unwrap_err().is_not_found());
}
