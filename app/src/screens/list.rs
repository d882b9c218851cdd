use comfy_table::{presets, ContentArrangement, Table};
use teams_core::{ids, IdStrategy, Team, TeamDraft};

use super::{Alert, Route};
use crate::api::TeamsApi;

pub const TITLE: &str = "FIFA - Official Teams";

/// Every team as a list, plus the "new team" form.
#[derive(Debug)]
pub struct ListScreen {
    teams: Vec<Team>,
    loading: bool,
    /// `Some` while the new-team form is open.
    form: Option<TeamDraft>,
    last_id: i64,
    id_strategy: IdStrategy,
    alert: Option<Alert>,
}

impl ListScreen {
    /// Starts out loading; call `refresh` to fetch the teams.
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            teams: Vec::new(),
            loading: true,
            form: None,
            last_id: 0,
            id_strategy,
            alert: None,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_id(&self) -> i64 {
        self.last_id
    }

    pub fn form(&self) -> Option<&TeamDraft> {
        self.form.as_ref()
    }

    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Fetch the whole collection. A failure leaves an empty list behind.
    pub async fn refresh(&mut self, api: &TeamsApi) {
        self.loading = true;
        match api.list_teams().await {
            Ok(teams) => {
                if !teams.is_empty() {
                    self.last_id = ids::last_id(&teams);
                }
                self.teams = teams;
            }
            Err(_) => {
                self.teams.clear();
                self.alert = Some(Alert::error("Error", "Could not load the teams. Try again."));
            }
        }
        self.loading = false;
    }

    pub fn open_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(TeamDraft::default());
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    pub fn form_mut(&mut self) -> Option<&mut TeamDraft> {
        self.form.as_mut()
    }

    /// Create a team from the form. Returns the new id on success; on
    /// failure the form stays open and an alert is raised.
    pub async fn submit_form(&mut self, api: &TeamsApi) -> Option<String> {
        let draft = self.form.clone().unwrap_or_default();
        let id = self.id_strategy.next_id(self.last_id);
        let team = match draft.into_team(id.clone()) {
            Ok(team) => team,
            Err(e) => {
                log::debug!("new team rejected: {e}");
                self.alert = Some(Alert::error("Error", "Please fill in every field."));
                return None;
            }
        };

        match api.add_team(&team).await {
            Ok(()) => {
                if self.id_strategy == IdStrategy::Sequential {
                    self.last_id = self.last_id.max(ids::numeric_id(&id));
                }
                self.form = None;
                self.refresh(api).await;
                Some(id)
            }
            Err(_) => {
                self.alert = Some(Alert::error("Error", "Could not add the team. Try again."));
                None
            }
        }
    }

    pub fn open(&self, id: &str) -> Route {
        Route::Detail { id: id.to_string() }
    }

    pub fn render(&self) -> String {
        if self.loading {
            return "Loading teams...".to_string();
        }

        let mut out = format!("{TITLE}\n");
        if self.teams.is_empty() {
            out.push_str("No teams yet.\n");
        } else {
            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Id", "Name", "Logo"]);
            for team in &self.teams {
                table.add_row(vec![team.id.as_str(), team.name.as_str(), team.logo.as_str()]);
            }
            out.push_str(&table.to_string());
            out.push('\n');
        }

        if let Some(form) = &self.form {
            out.push_str("New team\n");
            out.push_str(&format!("  Name:        {}\n", form.name));
            out.push_str(&format!("  Description: {}\n", form.description));
            out.push_str(&format!("  Logo URL:    {}\n", form.logo));
        }
        out
    }
}
