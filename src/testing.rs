//! Small open-field chase game used by the tests.
//!
//! Agent 0 collects food, the other agents catch it by moving onto its cell.

use crate::env::{Action, Vec2D};
use crate::error::{Error, Result};
use crate::game::{GameState, Spatial};
use crate::tree::TreeGame;

pub const FOOD_REWARD: f64 = 10.0;
pub const TIME_PENALTY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub width: i16,
    pub height: i16,
    pub agents: Vec<Vec2D>,
    pub food: Vec<Vec2D>,
    pub score: f64,
}

impl Field {
    /// Parses a field from rows of `.`, `o` (food), `0` and `1`..`9` (agents).
    /// The first row is the top of the field.
    pub fn parse(txt: &str) -> Field {
        let rows: Vec<&str> = txt
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len() as i16;
        let width = rows.first().map_or(0, |r| r.split_whitespace().count()) as i16;

        let mut agents = Vec::new();
        let mut food = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let y = height - 1 - y as i16;
            for (x, c) in row.split_whitespace().enumerate() {
                let p = Vec2D::new(x as i16, y);
                match c {
                    "o" => food.push(p),
                    "." => {}
                    id => {
                        let id: usize = id.parse().expect("Invalid cell");
                        if agents.len() <= id {
                            agents.resize(id + 1, Vec2D::default());
                        }
                        agents[id] = p;
                    }
                }
            }
        }
        Field {
            width,
            height,
            agents,
            food,
            score: 0.0,
        }
    }

    fn inside(&self, p: Vec2D) -> bool {
        0 <= p.x && p.x < self.width && 0 <= p.y && p.y < self.height
    }
}

impl GameState for Field {
    fn num_agents(&self) -> usize {
        self.agents.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        let p = self.agents[agent];
        Action::iter().filter(|&a| self.inside(p.apply(a))).collect()
    }

    fn successor(&self, agent: usize, action: Action) -> Result<Self> {
        if !self.legal_actions(agent).contains(&action) {
            return Err(Error::InvalidAction { agent, action });
        }
        let mut next = self.clone();
        next.agents[agent] = self.agents[agent].apply(action);
        if agent == 0 {
            next.score -= TIME_PENALTY;
            let p = next.agents[0];
            if let Some(i) = next.food.iter().position(|&f| f == p) {
                next.food.swap_remove(i);
                next.score += FOOD_REWARD;
            }
        }
        Ok(next)
    }

    fn is_win(&self) -> bool {
        self.food.is_empty() && !self.is_lose()
    }

    fn is_lose(&self) -> bool {
        self.agents[1..].contains(&self.agents[0])
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl Spatial for Field {
    fn position(&self, agent: usize) -> Vec2D {
        self.agents[agent]
    }

    fn food(&self) -> Vec<Vec2D> {
        self.food.clone()
    }
}

/// Tree game that lists `action` of `agent` as legal but refuses to play it.
#[derive(Debug, Clone)]
pub struct Rejecting {
    pub game: TreeGame,
    pub agent: usize,
    pub action: Action,
}

impl Rejecting {
    pub fn new(game: TreeGame, agent: usize, action: Action) -> Rejecting {
        Rejecting {
            game,
            agent,
            action,
        }
    }
}

impl GameState for Rejecting {
    fn num_agents(&self) -> usize {
        self.game.num_agents()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Action> {
        self.game.legal_actions(agent)
    }

    fn successor(&self, agent: usize, action: Action) -> Result<Self> {
        if agent == self.agent && action == self.action {
            return Err(Error::InvalidAction { agent, action });
        }
        Ok(Rejecting {
            game: self.game.successor(agent, action)?,
            ..self.clone()
        })
    }

    fn is_win(&self) -> bool {
        self.game.is_win()
    }

    fn is_lose(&self) -> bool {
        self.game.is_lose()
    }

    fn score(&self) -> f64 {
        self.game.score()
    }
}

#[test]
fn parse_field() {
    let field = Field::parse(
        r#"
        . o .
        0 . 1
        "#,
    );
    assert_eq!((field.width, field.height), (3, 2));
    assert_eq!(field.agents, vec![Vec2D::new(0, 0), Vec2D::new(2, 0)]);
    assert_eq!(field.food, vec![Vec2D::new(1, 1)]);
    assert_eq!(
        field.legal_actions(0),
        vec![Action::North, Action::East, Action::Stop]
    );

    let next = field.successor(0, Action::North).unwrap();
    assert_eq!(next.score, -TIME_PENALTY);
    let next = next.successor(0, Action::East).unwrap();
    assert!(next.is_win());
    assert_eq!(next.score, FOOD_REWARD - 2.0 * TIME_PENALTY);
}
