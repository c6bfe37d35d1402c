//! Entry, stop-loss, take-profit and lot-size computation

use tracing::debug;

use crate::config::{EngineConfig, RiskConfig};
use crate::error::EngineError;
use crate::indicators::keys;
use crate::markets::instrument::Instrument;
use crate::models::decision::{TradeDecision, TradeDirection, TradeLevels};
use crate::models::snapshot::IndicatorSnapshot;

/// Tolerance for floating-point comparisons against the risk/reward floor
const RR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct LevelCalculator {
    risk: RiskConfig,
}

/// Signed helpers so LONG and SHORT share one code path
#[derive(Clone, Copy)]
struct Side {
    sign: f64,
}

impl Side {
    fn of(direction: TradeDirection) -> Option<Self> {
        match direction {
            TradeDirection::Long => Some(Side { sign: 1.0 }),
            TradeDirection::Short => Some(Side { sign: -1.0 }),
            TradeDirection::NoTrade => None,
        }
    }

    /// Distance from entry to `level` measured in the protective (stop) direction
    fn risk_distance(&self, entry: f64, level: f64) -> f64 {
        (entry - level) * self.sign
    }

    /// Distance from entry to `level` measured in the profit (target) direction
    fn reward_distance(&self, entry: f64, level: f64) -> f64 {
        (level - entry) * self.sign
    }

    fn stop_at(&self, entry: f64, distance: f64) -> f64 {
        entry - distance * self.sign
    }

    fn target_at(&self, entry: f64, distance: f64) -> f64 {
        entry + distance * self.sign
    }
}

impl LevelCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            risk: config.risk.clone(),
        }
    }

    /// Levels for a LONG or SHORT decision; `None` for NO_TRADE
    pub fn levels(
        &self,
        decision: &TradeDecision,
        snapshot: &IndicatorSnapshot,
        current_price: f64,
        instrument: &Instrument,
    ) -> Result<Option<TradeLevels>, EngineError> {
        let Some(side) = Side::of(decision.direction) else {
            return Ok(None);
        };
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "current price must be positive, got {}",
                current_price
            )));
        }

        let risk = &self.risk;
        let entry = current_price;
        let atr = snapshot
            .get(keys::ATR_14)
            .filter(|atr| *atr > 0.0)
            .unwrap_or(entry * risk.atr_fallback_fraction);

        let widen = snapshot
            .get(keys::NATR_14)
            .is_some_and(|natr| natr > risk.natr_widening_threshold);
        let (sl_multiplier, tp_multiplier) = if widen {
            (
                risk.atr_sl_multiplier * risk.widening_factor,
                risk.atr_tp_multiplier * risk.widening_factor,
            )
        } else {
            (risk.atr_sl_multiplier, risk.atr_tp_multiplier)
        };

        // Candidate stops on the protective side of entry, at least one pip away; the least
        // aggressive (smallest risk) wins
        let (support, band_edge) = match decision.direction {
            TradeDirection::Long => (snapshot.get(keys::ROLLING_MIN), snapshot.get(keys::BBANDS_UPPER)),
            _ => (snapshot.get(keys::ROLLING_MAX), snapshot.get(keys::BBANDS_LOWER)),
        };
        let extremum_target = match decision.direction {
            TradeDirection::Long => snapshot.get(keys::ROLLING_MAX),
            _ => snapshot.get(keys::ROLLING_MIN),
        };

        let mut stop_distance = atr * sl_multiplier;
        let candidates = [
            snapshot.get(keys::SAR),
            support.map(|level| side.stop_at(level, atr * risk.structure_buffer_atr)),
        ];
        for candidate in candidates.into_iter().flatten() {
            let distance = side.risk_distance(entry, candidate);
            if distance >= instrument.pip_size && distance < stop_distance {
                stop_distance = distance;
            }
        }

        let floor_distance = stop_distance * risk.min_risk_reward;
        let mut target_distance = floor_distance.max(atr * tp_multiplier);

        // Cap at the nearer structural level on the target side, never below the risk/reward floor
        let cap_distance = [band_edge, extremum_target]
            .into_iter()
            .flatten()
            .map(|level| side.reward_distance(entry, level))
            .filter(|distance| *distance > 0.0)
            .fold(None, |nearest: Option<f64>, d| Some(nearest.map_or(d, |n| n.min(d))));
        if let Some(cap) = cap_distance {
            let cap_level = side.target_at(entry, cap);
            if target_distance - cap > cap_level.abs() * risk.cap_tolerance {
                target_distance = cap.max(floor_distance);
            }
        }

        let stop_loss = side.stop_at(entry, stop_distance);
        let take_profit = side.target_at(entry, target_distance);
        let risk_reward_ratio = target_distance / stop_distance;

        let ordered = match decision.direction {
            TradeDirection::Long => stop_loss < entry && entry < take_profit,
            _ => take_profit < entry && entry < stop_loss,
        };
        if !ordered || !stop_distance.is_finite() || stop_distance <= 0.0 {
            return Err(EngineError::InvariantViolation(format!(
                "{} levels out of order: stop {} entry {} target {}",
                decision.direction, stop_loss, entry, take_profit
            )));
        }
        if risk_reward_ratio + RR_EPSILON < risk.min_risk_reward {
            return Err(EngineError::InvariantViolation(format!(
                "risk/reward {:.3} below minimum {:.3}",
                risk_reward_ratio, risk.min_risk_reward
            )));
        }

        let stop_loss_pips = instrument.to_pips(stop_distance);
        let take_profit_pips = instrument.to_pips(target_distance);
        let position_size = self.position_size(
            stop_loss_pips,
            instrument.pip_value_per_lot,
            decision.position_size_multiplier,
        );

        debug!(
            symbol = %instrument.symbol,
            direction = %decision.direction,
            entry,
            stop_loss,
            take_profit,
            risk_reward_ratio,
            position_size,
            "Levels computed"
        );

        Ok(Some(TradeLevels {
            entry_price: entry,
            stop_loss,
            take_profit,
            stop_loss_distance: stop_distance,
            take_profit_distance: target_distance,
            stop_loss_pips,
            take_profit_pips,
            risk_reward_ratio,
            position_size,
        }))
    }

    /// Risk-based lots, capped, scaled by the decision multiplier and rounded to the lot step
    pub fn position_size(&self, stop_loss_pips: f64, pip_value_per_lot: f64, multiplier: f64) -> f64 {
        let risk = &self.risk;
        let risk_amount = risk.account_balance * risk.max_risk_percent / 100.0;
        let base = risk_amount / (stop_loss_pips * pip_value_per_lot);
        let capped = base.min(risk.max_lot_size);
        let scaled = capped * multiplier.clamp(0.0, 1.0);
        (scaled / risk.lot_step).round() * risk.lot_step
    }
}

impl Default for LevelCalculator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
