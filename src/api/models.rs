use serde::{Deserialize, Serialize};

/// Candidate details collected on the first panel of the wizard.
///
/// Serialized field names follow the scoring service contract, which uses
/// `jobRole` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub qualification: String,
    pub skills: String,
    #[serde(rename = "jobRole")]
    pub job_role: String,
}

/// Free-text answers keyed by question id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub q1: String,
    pub q2: String,
    pub q3: String,
}

/// The single JSON body posted to the scoring service: the candidate
/// profile flattened at the top level plus the answers object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRequest {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub answers: AnswerSet,
}

/// Assessment returned by the scoring service.
///
/// All fields are opaque display strings. They are rendered verbatim and
/// never parsed or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub technical_strengths: String,
    pub weaknesses: String,
    pub communication: String,
    pub recommendation: String,
    pub decision: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> InterviewRequest {
        InterviewRequest {
            profile: CandidateProfile {
                name: "Jane Doe".to_string(),
                qualification: "BSc CS".to_string(),
                skills: "Python, SQL".to_string(),
                job_role: "Analyst".to_string(),
            },
            answers: AnswerSet {
                q1: "5 years".to_string(),
                q2: "Teamwork".to_string(),
                q3: "Growth".to_string(),
            },
        }
    }

    #[test]
    fn request_serializes_to_wire_format() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "qualification": "BSc CS",
                "skills": "Python, SQL",
                "jobRole": "Analyst",
                "answers": { "q1": "5 years", "q2": "Teamwork", "q3": "Growth" }
            })
        );
    }

    #[test]
    fn feedback_deserializes_from_service_response() {
        let body = r#"{
            "technical_strengths": "Strong",
            "weaknesses": "None",
            "communication": "Good",
            "recommendation": "Proceed",
            "decision": "Hire"
        }"#;
        let feedback: FeedbackResult = serde_json::from_str(body).unwrap();
        assert_eq!(feedback.technical_strengths, "Strong");
        assert_eq!(feedback.decision, "Hire");
    }
}
