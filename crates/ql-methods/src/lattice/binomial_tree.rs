//! Recombining binomial trees for a lognormal underlying.
//!
//! | Variant | Type | Reference |
//! |---|---|---|
//! | [`BinomialTree::jarrow_rudd`] | Equal probabilities | Jarrow & Rudd (1983) |
//! | [`BinomialTree::cox_ross_rubinstein`] | Equal jumps | Cox, Ross & Rubinstein (1979) |
//! | [`BinomialTree::leisen_reimer`] | Multiplicative | Leisen & Reimer (1996) |

use ql_core::errors::{Error, Result};
use ql_core::{ensure_param, Rate, Real, Size, Time, Volatility};
use std::fmt;

/// Tree construction used by a binomial engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    /// Cox-Ross-Rubinstein: equal jumps, drift in the probabilities.
    CoxRossRubinstein,
    /// Jarrow-Rudd: equal probabilities, drift in the node values.
    JarrowRudd,
    /// Leisen-Reimer: strike-centred, odd step counts only.
    LeisenReimer,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeKind::CoxRossRubinstein => f.write_str("Cox-Ross-Rubinstein"),
            TreeKind::JarrowRudd => f.write_str("Jarrow-Rudd"),
            TreeKind::LeisenReimer => f.write_str("Leisen-Reimer"),
        }
    }
}

impl std::str::FromStr for TreeKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "crr" | "coxrossrubinstein" => Ok(TreeKind::CoxRossRubinstein),
            "jr" | "jarrowrudd" => Ok(TreeKind::JarrowRudd),
            "lr" | "leisenreimer" => Ok(TreeKind::LeisenReimer),
            _ => Err(Error::InvalidArgument(format!("unknown binomial tree '{s}'"))),
        }
    }
}

/// Black-Scholes inputs a tree is calibrated to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeInputs {
    /// Spot price.
    pub spot: Real,
    /// Continuously-compounded risk-free rate.
    pub rate: Rate,
    /// Continuous dividend yield.
    pub dividend: Rate,
    /// Black volatility.
    pub volatility: Volatility,
    /// Time to maturity in years.
    pub maturity: Time,
}

impl TreeInputs {
    /// Log-space drift `r − q − σ²/2`.
    fn log_drift(&self) -> Real {
        self.rate - self.dividend - 0.5 * self.volatility * self.volatility
    }
}

/// How node values are laid out.
#[derive(Debug, Clone, Copy)]
enum UnderlyingKind {
    /// `x0 · exp(i · drift_per_step + (2j − i) · step)`
    LogSpace { step: Real },
    /// `x0 · down^(i − j) · up^j`
    Multiplicative { up: Real, down: Real },
}

/// A recombining binomial tree approximating geometric Brownian motion.
///
/// The tree has `steps + 1` time layers, with layer `i` having `i + 1` nodes.
/// Node `(i, j)` represents the state after `j` up-moves and `i − j` down-moves.
#[derive(Debug, Clone)]
pub struct BinomialTree {
    x0: Real,
    dt: Time,
    steps: Size,
    drift_per_step: Real,
    underlying: UnderlyingKind,
    pu: Real,
    pd: Real,
}

impl BinomialTree {
    /// Build a tree of the given kind. `strike` is used by Leisen-Reimer.
    ///
    /// # Errors
    /// `InvalidParameter` on zero steps or degenerate inputs;
    /// `NumericalInstability` if a branch probability leaves `[0, 1]`.
    pub fn new(kind: TreeKind, inputs: &TreeInputs, steps: Size, strike: Real) -> Result<Self> {
        match kind {
            TreeKind::CoxRossRubinstein => Self::cox_ross_rubinstein(inputs, steps),
            TreeKind::JarrowRudd => Self::jarrow_rudd(inputs, steps),
            TreeKind::LeisenReimer => Self::leisen_reimer(inputs, steps, strike),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Initial underlying value (spot price).
    pub fn x0(&self) -> Real {
        self.x0
    }

    /// Number of nodes at time step `i` (always `i + 1` for a binomial tree).
    pub fn size(&self, i: Size) -> Size {
        i + 1
    }

    /// Index of the descendant node at step `i+1` for a given `branch`.
    ///
    /// `branch = 0` → down, `branch = 1` → up.
    pub fn descendant(&self, _i: Size, index: Size, branch: Size) -> Size {
        index + branch
    }

    /// Underlying value at node `(i, index)`.
    pub fn underlying(&self, i: Size, index: Size) -> Real {
        match self.underlying {
            UnderlyingKind::LogSpace { step } => {
                let j = 2.0 * index as Real - i as Real;
                self.x0 * (i as Real * self.drift_per_step + j * step).exp()
            }
            UnderlyingKind::Multiplicative { up, down } => {
                self.x0 * down.powi((i - index) as i32) * up.powi(index as i32)
            }
        }
    }

    /// Transition probability for `branch` (0 = down, 1 = up).
    pub fn probability(&self, _i: Size, _index: Size, branch: Size) -> Real {
        if branch == 1 {
            self.pu
        } else {
            self.pd
        }
    }

    // ── Named constructors ───────────────────────────────────────────────

    /// Jarrow-Rudd tree.
    ///
    /// `p_up = p_down = 0.5`, step size `σ √Δt`, drift carried by the nodes.
    pub fn jarrow_rudd(inputs: &TreeInputs, steps: Size) -> Result<Self> {
        let (dt, dps, std) = log_params(inputs, steps)?;
        Ok(Self {
            x0: inputs.spot,
            dt,
            steps,
            drift_per_step: dps,
            underlying: UnderlyingKind::LogSpace { step: std },
            pu: 0.5,
            pd: 0.5,
        })
    }

    /// Cox-Ross-Rubinstein tree.
    ///
    /// `dx = σ √Δt`, `p_up = ½ + ½ μΔt / dx`; node values carry no drift.
    pub fn cox_ross_rubinstein(inputs: &TreeInputs, steps: Size) -> Result<Self> {
        let (dt, dps, dx) = log_params(inputs, steps)?;
        let pu = 0.5 + 0.5 * dps / dx;
        check_probability(pu, "cox-ross-rubinstein tree")?;
        Ok(Self {
            x0: inputs.spot,
            dt,
            steps,
            drift_per_step: 0.0,
            underlying: UnderlyingKind::LogSpace { step: dx },
            pu,
            pd: 1.0 - pu,
        })
    }

    /// Leisen-Reimer tree, centred on `strike`.
    ///
    /// Uses the Peizer-Pratt method 2 inversion. An even step count is
    /// rounded up to the next odd one.
    pub fn leisen_reimer(inputs: &TreeInputs, steps: Size, strike: Real) -> Result<Self> {
        ensure_param!(
            strike.is_finite() && strike > 0.0,
            "strike",
            "must be positive, got {strike}"
        );
        ensure_param!(steps > 0, "steps", "must be positive, got {steps}");
        let odd_steps = if steps % 2 != 0 { steps } else { steps + 1 };
        let (dt, dps, _) = log_params(inputs, odd_steps)?;
        let n = odd_steps as Real;
        let total_var = inputs.volatility * inputs.volatility * inputs.maturity;
        let ermqdt = (dps + 0.5 * total_var / n).exp();
        let d2 = ((inputs.spot / strike).ln() + dps * n) / total_var.sqrt();

        let pu = peizer_pratt_2(d2, odd_steps);
        let pdash = peizer_pratt_2(d2 + total_var.sqrt(), odd_steps);
        // Strictly inside (0, 1): both branches divide by it.
        if !(pu > 0.0 && pu < 1.0) {
            return Err(Error::NumericalInstability {
                context: "leisen-reimer tree",
                reason: format!("degenerate up probability {pu}"),
            });
        }
        let up = ermqdt * pdash / pu;
        let down = (ermqdt - pu * up) / (1.0 - pu);
        Ok(Self {
            x0: inputs.spot,
            dt,
            steps: odd_steps,
            drift_per_step: dps,
            underlying: UnderlyingKind::Multiplicative { up, down },
            pu,
            pd: 1.0 - pu,
        })
    }
}

// ─── Helper functions ─────────────────────────────────────────────────────────

/// Returns `(dt, drift_per_step, std_dev_per_step)` in log-space.
fn log_params(inputs: &TreeInputs, steps: Size) -> Result<(Time, Real, Real)> {
    ensure_param!(steps > 0, "steps", "must be positive, got {steps}");
    ensure_param!(
        inputs.spot.is_finite() && inputs.spot > 0.0,
        "spot",
        "must be positive, got {}",
        inputs.spot
    );
    ensure_param!(
        inputs.maturity.is_finite() && inputs.maturity > 0.0,
        "maturity",
        "a tree needs a positive time to maturity, got {}",
        inputs.maturity
    );
    ensure_param!(
        inputs.volatility.is_finite() && inputs.volatility > 0.0,
        "volatility",
        "a tree needs a positive volatility, got {}",
        inputs.volatility
    );
    let dt = inputs.maturity / steps as Real;
    Ok((dt, inputs.log_drift() * dt, inputs.volatility * dt.sqrt()))
}

fn check_probability(p: Real, context: &'static str) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::NumericalInstability {
            context,
            reason: format!("up probability {p} outside [0, 1]; use more steps"),
        })
    }
}

/// Peizer-Pratt method 2 inversion.
///
/// Maps a normal quantile `z` to a probability in `[0, 1]` for an `n`-step
/// binomial approximation. `n` must be odd.
fn peizer_pratt_2(z: Real, n: Size) -> Real {
    let nf = n as Real;
    let r = z / (nf + 1.0 / 3.0 + 0.1 / (nf + 1.0));
    let ex = (-r * r * (nf + 1.0 / 6.0)).exp();
    0.5 + z.signum() * 0.5 * (1.0 - ex).sqrt()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
