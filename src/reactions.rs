//! Electrochemical reaction network.
//!
//! The network lists every active reaction and, per electrode, its
//! stoichiometric coefficients and the name of the interfacial current
//! density variable driving it. Every electrode entry carries the same
//! fields (`s`, `s_ox`, `aj`) whichever side reactions are active;
//! reactions without a secondary species hold a literal zero `s_ox`.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value as Json};

use crate::error::ModelError;
use crate::expr::Expr;
use crate::options::standard::{OXYGEN, SIDE_REACTIONS};
use crate::options::OptionAssignment;
use crate::parameters::LeadAcidParameters;

const INTERFACIAL_CURRENT_DENSITY: &str = "interfacial current density";

/// Electrode an entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Electrode {
    Negative,
    Positive,
}

impl Electrode {
    pub const ALL: [Self; 2] = [Self::Negative, Self::Positive];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Positive => "Positive",
        }
    }
}

impl fmt::Display for Electrode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reactions the lead-acid model knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReactionKind {
    /// Charge/discharge reaction.
    Main,
    /// Oxygen evolution side reaction.
    Oxygen,
}

impl ReactionKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Oxygen => "oxygen",
        }
    }

    /// True for reactions that produce or consume a secondary species.
    #[must_use]
    pub const fn has_secondary_species(&self) -> bool {
        matches!(self, Self::Oxygen)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stoichiometric data of one reaction at one electrode.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectrodeReaction {
    /// Electrolyte stoichiometric coefficient.
    pub s: Expr,
    /// Secondary-species (oxygen) stoichiometric coefficient.
    pub s_ox: Expr,
    /// Name of the interfacial current density variable.
    pub aj: String,
}

/// Per-electrode entries of one reaction.
pub type ReactionEntry = BTreeMap<Electrode, ElectrodeReaction>;

/// The set of active reactions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReactionNetwork {
    reactions: BTreeMap<ReactionKind, ReactionEntry>,
}

impl ReactionNetwork {
    #[must_use]
    pub fn get(&self, kind: ReactionKind) -> Option<&ReactionEntry> {
        self.reactions.get(&kind)
    }

    #[must_use]
    pub fn entry(&self, kind: ReactionKind, electrode: Electrode) -> Option<&ElectrodeReaction> {
        self.get(kind).and_then(|r| r.get(&electrode))
    }

    #[must_use]
    pub fn contains(&self, kind: ReactionKind) -> bool {
        self.reactions.contains_key(&kind)
    }

    /// Active reactions in a stable order.
    pub fn kinds(&self) -> impl Iterator<Item = ReactionKind> + '_ {
        self.reactions.keys().copied()
    }

    /// Names of the active reactions.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.kinds().map(|k| k.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// True when some active reaction involves a secondary species.
    #[must_use]
    pub fn tracks_secondary_species(&self) -> bool {
        self.kinds().any(|k| k.has_secondary_species())
    }

    /// Attribute names every electrode entry exposes in the keyed view.
    ///
    /// `s_ox` is listed only when a secondary species is tracked.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<&'static str> {
        if self.tracks_secondary_species() {
            vec!["s", "s_ox", "aj"]
        } else {
            vec!["s", "aj"]
        }
    }

    /// Names of all interfacial current density variables, one per
    /// reaction and electrode.
    #[must_use]
    pub fn interfacial_current_variables(&self) -> Vec<&str> {
        self.reactions
            .values()
            .flat_map(|entry| entry.values().map(|e| e.aj.as_str()))
            .collect()
    }

    /// Keyed view `{reaction: {electrode: {s, [s_ox], aj}}}`.
    pub fn to_json(&self) -> Result<Json, ModelError> {
        let with_s_ox = self.tracks_secondary_species();
        let mut root = Map::new();
        for (kind, entry) in &self.reactions {
            let mut electrodes = Map::new();
            for (electrode, data) in entry {
                let mut fields = Map::new();
                fields.insert("s".to_string(), expr_to_json(&data.s)?);
                if with_s_ox {
                    fields.insert("s_ox".to_string(), expr_to_json(&data.s_ox)?);
                }
                fields.insert("aj".to_string(), Json::String(data.aj.clone()));
                electrodes.insert(electrode.to_string(), Json::Object(fields));
            }
            root.insert(kind.to_string(), Json::Object(electrodes));
        }
        Ok(Json::Object(root))
    }

    /// Stable hash of the keyed view.
    ///
    /// Structurally equal networks have equal fingerprints.
    pub fn fingerprint(&self) -> Result<String, ModelError> {
        let canonical = serde_json::to_vec(&self.to_json()?)
            .map_err(|e| ModelError::internal(format!("serialize reaction network: {e}")))?;
        Ok(blake3::hash(&canonical).to_hex().to_string())
    }
}

fn expr_to_json(expr: &Expr) -> Result<Json, ModelError> {
    serde_json::to_value(expr)
        .map_err(|e| ModelError::internal(format!("serialize coefficient: {e}")))
}

fn current_density_name(electrode: Electrode, reaction: Option<&str>) -> String {
    match reaction {
        Some(r) => format!("{electrode} electrode {r} {INTERFACIAL_CURRENT_DENSITY}"),
        None => format!("{electrode} electrode {INTERFACIAL_CURRENT_DENSITY}"),
    }
}

/// Derives the reaction network from the resolved options.
///
/// The result depends only on the options and the parameters.
#[derive(Debug, Clone, Copy)]
pub struct ReactionNetworkBuilder<'a> {
    params: &'a LeadAcidParameters,
}

impl<'a> ReactionNetworkBuilder<'a> {
    #[must_use]
    pub const fn new(params: &'a LeadAcidParameters) -> Self {
        Self { params }
    }

    /// Builds the network for `options`.
    ///
    /// A missing `side reactions` option is treated as no side reactions.
    #[must_use]
    pub fn build(&self, options: &OptionAssignment) -> ReactionNetwork {
        let mut reactions = BTreeMap::new();
        reactions.insert(ReactionKind::Main, self.main_reaction());

        let oxygen_active = options
            .value(SIDE_REACTIONS)
            .is_some_and(|side| side.contains(OXYGEN));
        if oxygen_active {
            reactions.insert(ReactionKind::Oxygen, self.oxygen_reaction());
        }

        let network = ReactionNetwork { reactions };
        tracing::debug!(reactions = ?network.names(), "built reaction network");
        network
    }

    fn main_reaction(&self) -> ReactionEntry {
        Electrode::ALL
            .into_iter()
            .map(|electrode| {
                let s = match electrode {
                    Electrode::Negative => self.params.s_n.clone(),
                    Electrode::Positive => self.params.s_p.clone(),
                };
                let entry = ElectrodeReaction {
                    s,
                    s_ox: Expr::zero(),
                    aj: current_density_name(electrode, None),
                };
                (electrode, entry)
            })
            .collect()
    }

    fn oxygen_reaction(&self) -> ReactionEntry {
        let p = self.params;
        Electrode::ALL
            .into_iter()
            .map(|electrode| {
                let entry = ElectrodeReaction {
                    s: -(p.s_plus_ox.clone() + p.t_plus.clone()),
                    s_ox: -p.s_ox_ox.clone(),
                    aj: current_density_name(electrode, Some(ReactionKind::Oxygen.as_str())),
                };
                (electrode, entry)
            })
            .collect()
    }
}
