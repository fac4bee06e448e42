//! Form for picking a team, pick type and confidence for one game

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use log::{debug, info};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use thiserror::Error;

use crate::config::PickFormConfig;
use crate::constants::{DEFAULT_MAX_CONFIDENCE, ERROR_SELECT_CONFIDENCE, ERROR_SELECT_TEAM, MAX_CONFIDENCE_LIMIT};
use crate::entities::{Game, PickFormData, PickType, Team};
use crate::theme::{AlertVariant, ButtonVariant, ClassList, Size, Theme};
use crate::ui::components::common::{create_block, is_activation, left_click};
use crate::ui::components::{Alert, Button, ButtonKind, Select, SelectOption, SelectValue};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::text::pluralize;

/// Reasons a submit was refused, shown inline above the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickValidationError {
    #[error("{}", ERROR_SELECT_TEAM)]
    SelectTeam,
    #[error("{}", ERROR_SELECT_CONFIDENCE)]
    SelectConfidence,
}

/// Focusable controls in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickFormField {
    Team,
    PickType,
    Confidence,
    Cancel,
    Submit,
}

pub struct PickForm {
    pub game: Game,
    pub loading: bool,
    pub disabled: bool,
    pub show_confidence: bool,
    pub max_confidence: u32,
    pub cancel_enabled: bool,
    pub class_name: String,
    team: Select,
    pick_type: Select,
    confidence: Select,
    cancel: Button,
    submit: Button,
    focus: Option<PickFormField>,
    errors: Vec<PickValidationError>,
}

/// Only the two teams playing `game` are offered
fn team_options(game: &Game, teams: &[Team]) -> Vec<SelectOption> {
    teams
        .iter()
        .filter(|team| team.id == game.home_team_id || team.id == game.away_team_id)
        .map(|team| SelectOption::new(team.id, team.option_label()))
        .collect()
}

fn confidence_options(max: u32) -> Vec<SelectOption> {
    (1..=max)
        .map(|points| SelectOption::new(points, pluralize(points as usize, "point", "points")))
        .collect()
}

impl PickForm {
    pub fn new(game: Game, teams: &[Team]) -> Self {
        let team = Select::new("pickedTeamId", team_options(&game, teams))
            .label("Pick Team")
            .placeholder("Select a team")
            .required(true);
        let pick_type_options = PickType::ALL
            .into_iter()
            .map(|pick_type| SelectOption::new(pick_type.key(), pick_type.option_label()))
            .collect();
        let pick_type = Select::new("pickType", pick_type_options)
            .label("Pick Type")
            .required(true)
            .default_value(PickType::Straight.key());
        let confidence = Select::new("confidencePoints", confidence_options(DEFAULT_MAX_CONFIDENCE))
            .label("Confidence Points")
            .required(true)
            .default_value(1_u32);
        Self {
            game,
            loading: false,
            disabled: false,
            show_confidence: true,
            max_confidence: DEFAULT_MAX_CONFIDENCE,
            cancel_enabled: false,
            class_name: String::new(),
            team,
            pick_type,
            confidence,
            cancel: Button::new("Cancel")
                .variant(ButtonVariant::Outline)
                .on_press(Action::CancelPick),
            submit: Button::new("Submit Pick").kind(ButtonKind::Submit),
            focus: None,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: &PickFormConfig) -> Self {
        self.show_confidence(config.show_confidence)
            .max_confidence(config.max_confidence)
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn show_confidence(mut self, show: bool) -> Self {
        self.show_confidence = show;
        self
    }

    /// Clamped to `1..=MAX_CONFIDENCE_LIMIT`
    #[must_use]
    pub fn max_confidence(mut self, max: u32) -> Self {
        self.max_confidence = max.clamp(1, MAX_CONFIDENCE_LIMIT);
        self.confidence.set_options(confidence_options(self.max_confidence));
        self
    }

    #[must_use]
    pub fn cancel_enabled(mut self, enabled: bool) -> Self {
        self.cancel_enabled = enabled;
        self
    }

    pub fn is_form_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn errors(&self) -> &[PickValidationError] {
        &self.errors
    }

    pub fn focused(&self) -> Option<PickFormField> {
        self.focus
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("pick-form")
            .modifier_if(self.loading, "loading")
            .modifier_if(!self.errors.is_empty(), "invalid")
            .extra(&self.class_name)
    }

    /// "Week 3: DAL @ PHI"
    pub fn game_info(&self) -> String {
        let abbreviation = |team: Option<&Team>| team.map(|t| t.abbreviation.clone()).unwrap_or_default();
        format!(
            "Week {}: {} @ {}",
            self.game.week,
            abbreviation(self.game.away_team.as_ref()),
            abbreviation(self.game.home_team.as_ref())
        )
    }

    pub fn fields(&self) -> Vec<PickFormField> {
        let mut fields = vec![PickFormField::Team, PickFormField::PickType];
        if self.show_confidence {
            fields.push(PickFormField::Confidence);
        }
        if self.cancel_enabled {
            fields.push(PickFormField::Cancel);
        }
        fields.push(PickFormField::Submit);
        fields
    }

    /// Current selections, or every reason they can not be submitted
    pub fn validate(&self) -> Result<PickFormData, Vec<PickValidationError>> {
        let team_id = self
            .team
            .value()
            .and_then(SelectValue::as_int)
            .and_then(|id| u32::try_from(id).ok())
            .filter(|id| *id != 0);
        let confidence_points = self
            .confidence
            .value()
            .and_then(SelectValue::as_int)
            .and_then(|points| u32::try_from(points).ok())
            .filter(|points| *points != 0);

        let mut errors = Vec::new();
        if team_id.is_none() {
            errors.push(PickValidationError::SelectTeam);
        }
        if self.show_confidence && confidence_points.is_none() {
            errors.push(PickValidationError::SelectConfidence);
        }
        match team_id {
            Some(team_id) if errors.is_empty() => Ok(PickFormData {
                team_id,
                pick_type: self
                    .pick_type
                    .value()
                    .and_then(|value| PickType::from_key(&value.to_string()))
                    .unwrap_or_default(),
                confidence_points: confidence_points.filter(|_| self.show_confidence),
            }),
            _ => Err(errors),
        }
    }

    pub fn submit(&mut self) -> Action {
        if self.is_form_disabled() {
            return Action::None;
        }
        match self.validate() {
            Ok(data) => {
                self.errors.clear();
                info!("pick form: submitting team {} for game {}", data.team_id, self.game.id);
                Action::SubmitPick(data)
            }
            Err(errors) => {
                debug!("pick form: {} validation error(s)", errors.len());
                self.errors = errors;
                Action::None
            }
        }
    }

    fn select_mut(&mut self, field: PickFormField) -> Option<&mut Select> {
        match field {
            PickFormField::Team => Some(&mut self.team),
            PickFormField::PickType => Some(&mut self.pick_type),
            PickFormField::Confidence => Some(&mut self.confidence),
            PickFormField::Cancel | PickFormField::Submit => None,
        }
    }

    fn blur(&mut self, field: PickFormField) -> Action {
        match field {
            PickFormField::Cancel => self.cancel.on_blur(),
            PickFormField::Submit => self.submit.on_blur(),
            select => self.select_mut(select).map_or(Action::None, Component::on_blur),
        }
    }

    fn set_focus(&mut self, next: Option<PickFormField>) -> Action {
        if self.focus == next {
            return Action::None;
        }
        let mut actions = Vec::new();
        if let Some(previous) = self.focus {
            actions.push(self.blur(previous));
        }
        self.focus = next;
        if let Some(field) = next {
            actions.push(match field {
                PickFormField::Cancel => self.cancel.on_focus(),
                PickFormField::Submit => self.submit.on_focus(),
                select => self.select_mut(select).map_or(Action::None, Component::on_focus),
            });
        }
        Action::batch(actions)
    }

    fn cycle_focus(&mut self, forward: bool) -> Action {
        let fields = self.fields();
        let position = self.focus.and_then(|focus| fields.iter().position(|f| *f == focus));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => fields.len() - 1,
            (Some(index), true) => (index + 1) % fields.len(),
            (Some(index), false) => (index + fields.len() - 1) % fields.len(),
        };
        self.set_focus(Some(fields[next]))
    }

    fn sync_disabled(&mut self) {
        let disabled = self.is_form_disabled();
        self.team.disabled = disabled;
        self.pick_type.disabled = disabled;
        self.confidence.disabled = disabled;
        self.cancel.disabled = disabled;
        self.submit.disabled = disabled;
        self.submit.loading = self.loading;
    }

    fn error_alert(&self) -> Option<Alert> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            Alert::new(AlertVariant::Error)
                .size(Size::Sm)
                .messages(self.errors.iter().map(ToString::to_string).collect()),
        )
    }

    pub fn height(&self) -> u16 {
        let alert = self.error_alert().map_or(0, |alert| alert.height());
        let confidence = if self.show_confidence {
            self.confidence.height()
        } else {
            0
        };
        // borders, game info, gap and the button row
        2 + 1 + alert + self.team.height() + self.pick_type.height() + confidence + 2
    }
}

impl Component for PickForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.sync_disabled();
        match key.code {
            KeyCode::Tab => return self.cycle_focus(true),
            KeyCode::BackTab => return self.cycle_focus(false),
            _ => {}
        }
        match self.focus {
            Some(PickFormField::Submit) if is_activation(&key) => self.submit(),
            Some(PickFormField::Cancel) => self.cancel.handle_key_events(key),
            Some(field) => self.select_mut(field).map_or(Action::None, |select| select.handle_key_events(key)),
            None => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        self.sync_disabled();
        if LayoutManager::hit(self.submit.area(), column, row) {
            let focus = self.set_focus(Some(PickFormField::Submit));
            return Action::batch([focus, self.submit()]);
        }
        if self.cancel_enabled && LayoutManager::hit(self.cancel.area(), column, row) {
            let focus = self.set_focus(Some(PickFormField::Cancel));
            return Action::batch([focus, self.cancel.press()]);
        }

        let mut actions = Vec::new();
        for field in self.fields() {
            let Some(select) = self.select_mut(field) else {
                continue;
            };
            let was_focused = select.is_focused();
            actions.push(select.handle_mouse_events(mouse));
            if select.is_focused() && !was_focused && self.focus != Some(field) {
                let previous = self.focus.replace(field);
                if let Some(previous) = previous {
                    actions.push(self.blur(previous));
                }
            }
        }
        Action::batch(actions)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        self.sync_disabled();
        let styles = theme.styles();
        let block = create_block(Some("Make Your Pick"), theme, self.focus.is_some());
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let mut alert = self.error_alert();
        let confidence_height = if self.show_confidence {
            self.confidence.height()
        } else {
            0
        };
        let rows = LayoutManager::stack(
            inner,
            &[
                1,
                alert.as_ref().map_or(0, Alert::height),
                self.team.height(),
                self.pick_type.height(),
                confidence_height,
                1,
                1,
            ],
        );

        f.render_widget(Paragraph::new(Span::styled(self.game_info(), styles.muted())), rows[0]);
        if let Some(alert) = alert.as_mut() {
            alert.render(f, rows[1], theme);
        }

        // Expanded lists draw over the fields below them, so render bottom-up
        if self.show_confidence {
            self.confidence.render(f, rows[4], theme);
        }
        self.pick_type.render(f, rows[3], theme);
        self.team.render(f, rows[2], theme);

        let actions = rows[6];
        let submit_width = self.submit.width(theme).min(actions.width);
        let submit_area = Rect::new(actions.right().saturating_sub(submit_width), actions.y, submit_width, 1);
        if self.cancel_enabled {
            let cancel_width = self.cancel.width(theme);
            let cancel_x = submit_area.x.saturating_sub(cancel_width + 1).max(actions.x);
            self.cancel.render(f, Rect::new(cancel_x, actions.y, cancel_width, 1), theme);
        }
        self.submit.render(f, submit_area, theme);

        if self.loading {
            let line = Line::from(Span::styled("Submitting...", styles.muted()));
            f.render_widget(Paragraph::new(line).alignment(Alignment::Left), rows[5]);
        }
    }

    fn on_focus(&mut self) -> Action {
        if self.focus.is_none() {
            return self.set_focus(Some(PickFormField::Team));
        }
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.set_focus(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Conference, GameStatus};
    use chrono::DateTime;
    use crossterm::event::KeyModifiers;

    fn team(id: u32, city: &str, name: &str, abbreviation: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            city: city.to_string(),
            abbreviation: abbreviation.to_string(),
            conference: Conference::Nfc,
            division: "East".to_string(),
            logo_url: None,
        }
    }

    fn fixture() -> (Game, Vec<Team>) {
        let home = team(1, "Philadelphia", "Eagles", "PHI");
        let away = team(2, "Dallas", "Cowboys", "DAL");
        let other = team(3, "New York", "Giants", "NYG");
        let game = Game {
            id: 10,
            home_team_id: 1,
            away_team_id: 2,
            kickoff: DateTime::parse_from_rfc3339("2024-01-14T13:00:00-05:00").unwrap(),
            week: 3,
            season_year: 2024,
            home_score: None,
            away_score: None,
            spread: Some(-3.5),
            over_under: Some(47.5),
            status: GameStatus::Scheduled,
            home_team: Some(home.clone()),
            away_team: Some(away.clone()),
        };
        (game, vec![home, away, other])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn offers_only_the_games_teams() {
        let (game, teams) = fixture();
        let options = team_options(&game, &teams);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Philadelphia Eagles (PHI)", "Dallas Cowboys (DAL)"]);
    }

    #[test]
    fn confidence_labels_pluralize() {
        let options = confidence_options(3);
        assert_eq!(options[0].label, "1 point");
        assert_eq!(options[2].label, "3 points");
    }

    #[test]
    fn submit_without_team_reports_error() {
        let (game, teams) = fixture();
        let mut form = PickForm::new(game, &teams);
        assert_eq!(form.submit(), Action::None);
        assert_eq!(form.errors(), &[PickValidationError::SelectTeam]);
        assert_eq!(form.errors()[0].to_string(), "Please select a team");
    }

    #[test]
    fn valid_submit_emits_form_data() {
        let (game, teams) = fixture();
        let mut form = PickForm::new(game, &teams);
        form.handle_key_events(key(KeyCode::Tab));
        form.handle_key_events(key(KeyCode::Down));
        assert_eq!(
            form.submit(),
            Action::SubmitPick(PickFormData {
                team_id: 1,
                pick_type: PickType::Straight,
                confidence_points: Some(1),
            })
        );
    }

    #[test]
    fn hidden_confidence_is_left_out() {
        let (game, teams) = fixture();
        let mut form = PickForm::new(game, &teams).show_confidence(false);
        form.handle_key_events(key(KeyCode::Tab));
        form.handle_key_events(key(KeyCode::Down));
        let Action::SubmitPick(data) = form.submit() else {
            panic!("expected a submit");
        };
        assert_eq!(data.confidence_points, None);
        assert!(!form.fields().contains(&PickFormField::Confidence));
    }

    #[test]
    fn loading_form_does_not_submit() {
        let (game, teams) = fixture();
        let mut form = PickForm::new(game, &teams).loading(true);
        assert_eq!(form.submit(), Action::None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn max_confidence_is_clamped() {
        let (game, teams) = fixture();
        let form = PickForm::new(game, &teams).max_confidence(99);
        assert_eq!(form.max_confidence, MAX_CONFIDENCE_LIMIT);
    }
}
