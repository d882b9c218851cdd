use teams_core::Team;

use super::{Alert, ConfirmPrompt, Route};
use crate::api::TeamsApi;

/// One team: inline description editing and confirm-then-delete.
#[derive(Debug)]
pub struct DetailScreen {
    id: String,
    team: Option<Team>,
    loading: bool,
    editing: bool,
    new_description: String,
    delete_armed: bool,
    alert: Option<Alert>,
}

impl DetailScreen {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            team: None,
            loading: true,
            editing: false,
            new_description: String::new(),
            delete_armed: false,
            alert: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn new_description(&self) -> &str {
        &self.new_description
    }

    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    pub async fn load(&mut self, api: &TeamsApi) {
        self.loading = true;
        match api.get_team(&self.id).await {
            Ok(Some(team)) => {
                self.new_description = team.description.clone();
                self.team = Some(team);
            }
            Ok(None) => self.team = None,
            Err(_) => {
                self.team = None;
                self.alert = Some(Alert::error("Error", "Could not load the team"));
            }
        }
        self.loading = false;
    }

    pub fn start_editing(&mut self) {
        if self.team.is_some() {
            self.editing = true;
        }
    }

    pub fn set_description(&mut self, description: &str) {
        self.new_description = description.to_string();
    }

    /// Leave edit mode and restore the buffer from the shown team.
    pub fn cancel_editing(&mut self) {
        self.editing = false;
        if let Some(team) = &self.team {
            self.new_description = team.description.clone();
        }
    }

    /// Send the full team back with the edited description.
    pub async fn save(&mut self, api: &TeamsApi) {
        let Some(team) = &self.team else {
            return;
        };
        let updated = team.with_description(&self.new_description);
        match api.update_team(&self.id, &updated).await {
            Ok(()) => {
                self.team = Some(updated);
                self.editing = false;
                self.alert = Some(Alert::info("Updated", "The team was updated successfully"));
            }
            Err(_) => {
                self.alert = Some(Alert::error("Error", "Could not update the team"));
            }
        }
    }

    /// First step of deleting: the prompt to show. `None` when there is no
    /// team to delete.
    pub fn request_delete(&mut self) -> Option<ConfirmPrompt> {
        self.team.as_ref()?;
        self.delete_armed = true;
        Some(ConfirmPrompt {
            title: "Confirm deletion".to_string(),
            message: "Are you sure you want to delete this team?".to_string(),
        })
    }

    pub fn cancel_delete(&mut self) {
        self.delete_armed = false;
    }

    /// Second step of deleting. Returns the route to follow once the user
    /// dismisses the alert; `None` keeps the user here.
    pub async fn confirm_delete(&mut self, api: &TeamsApi) -> Option<Route> {
        if !self.delete_armed {
            return None;
        }
        self.delete_armed = false;
        match api.delete_team(&self.id).await {
            Ok(()) => {
                self.team = None;
                self.alert = Some(Alert::info("Deleted", "The team was deleted successfully"));
                Some(Route::List)
            }
            Err(_) => {
                self.alert = Some(Alert::error("Error", "Could not delete the team"));
                None
            }
        }
    }

    pub fn back(&self) -> Route {
        Route::List
    }

    pub fn render(&self) -> String {
        if self.loading {
            return "Loading team...".to_string();
        }
        let Some(team) = &self.team else {
            return "Team not found".to_string();
        };

        let mut out = format!("{}\n", team.name);
        if self.editing {
            out.push_str(&format!("Description (editing): {}\n", self.new_description));
        } else {
            out.push_str(&format!("{}\n", team.description));
        }
        out.push_str(&format!("Points: {}  Goals: {}\n", team.points, team.goals));
        out.push_str(&format!("Logo: {}\n", team.logo));
        out
    }
}
