use super::domain::DriveData;

/// Allowed drift between an idling period's reported duration and its timestamps.
pub const IDLING_DURATION_TOLERANCE_SECS: f64 = 1.0;

/// Reasons a single trip could not be analyzed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Missing field, wrong type, or unparseable timestamp.
    #[error("malformed drive data: {detail}")]
    MalformedInput { detail: String },
    /// Well-formed but semantically inconsistent input.
    #[error("invalid {field} ({value}): {reason}")]
    InvariantViolation {
        field: String,
        value: String,
        reason: &'static str,
    },
}

impl AnalysisError {
    pub(crate) fn malformed(err: serde_json::Error) -> Self {
        Self::MalformedInput {
            detail: err.to_string(),
        }
    }

    fn violation(field: impl Into<String>, value: impl ToString, reason: &'static str) -> Self {
        Self::InvariantViolation {
            field: field.into(),
            value: value.to_string(),
            reason,
        }
    }

    /// Field that triggered the failure, when known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedInput { .. } => None,
            Self::InvariantViolation { field, .. } => Some(field),
        }
    }
}

impl DriveData {
    /// Check the record's invariants, failing on the first violation found.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.drive_id.trim().is_empty() {
            return Err(AnalysisError::violation(
                "driveId",
                format!("{:?}", self.drive_id),
                "must not be empty",
            ));
        }

        if self.end_time < self.start_time {
            return Err(AnalysisError::violation(
                "endTime",
                self.end_time.to_rfc3339(),
                "must not precede startTime",
            ));
        }

        non_negative("distance", self.distance)?;
        non_negative("averageSpeed", self.average_speed)?;
        non_negative("maxSpeed", self.max_speed)?;

        if self.max_speed < self.average_speed {
            return Err(AnalysisError::violation(
                "maxSpeed",
                self.max_speed,
                "must not be lower than averageSpeed",
            ));
        }

        for (index, sample) in self.speed_data.iter().enumerate() {
            non_negative(format!("speedData[{index}].speed"), sample.speed)?;
        }

        for (index, period) in self.idling_periods.iter().enumerate() {
            non_negative(format!("idlingPeriods[{index}].duration"), period.duration)?;

            if period.end_time < period.start_time {
                return Err(AnalysisError::violation(
                    format!("idlingPeriods[{index}].endTime"),
                    period.end_time.to_rfc3339(),
                    "must not precede the period's startTime",
                ));
            }

            let span_secs =
                (period.end_time - period.start_time).num_milliseconds() as f64 / 1000.0;
            if (span_secs - period.duration).abs() > IDLING_DURATION_TOLERANCE_SECS {
                return Err(AnalysisError::violation(
                    format!("idlingPeriods[{index}].duration"),
                    period.duration,
                    "does not match the period's start and end times",
                ));
            }
        }

        if let Some(fuel) = self.fuel_consumption {
            non_negative("fuelConsumption", fuel)?;
        }
        if let Some(co2) = self.estimated_co2 {
            non_negative("estimatedCO2", co2)?;
        }

        Ok(())
    }
}

fn non_negative(field: impl Into<String>, value: f64) -> Result<(), AnalysisError> {
    if !value.is_finite() {
        return Err(AnalysisError::violation(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(AnalysisError::violation(field, value, "must not be negative"));
    }
    Ok(())
}
