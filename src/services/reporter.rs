use crate::models::{AggregateResult, Comment};
use std::fmt::Write;

fn push_comment(out: &mut String, comment: &Comment) {
    let _ = writeln!(out, "Author: {}", comment.author);
    let _ = writeln!(out, "Comment: {}", comment.text);
    let _ = writeln!(out, "Likes: {}", comment.like_count);
}

/// Renders one channel's aggregate result as the report block printed to the
/// operator. Called once per candidate, in candidate order, after the join.
pub fn render(result: &AggregateResult) -> String {
    let mut out = String::new();

    if let Some(stats) = &result.stats {
        let _ = writeln!(
            out,
            "Channel '{}' (ID: {}) has {} subscribers, {} videos, and {} views",
            result.candidate.title,
            result.candidate.id,
            stats.subscriber_count,
            stats.video_count,
            stats.view_count
        );
    }

    if let Some(video) = &result.video {
        let _ = writeln!(out, "Video ID: {}", video.video_id);
        let _ = writeln!(out, "Duration: {}", video.duration_display);

        match &video.statistics {
            Some(stats) => {
                let _ = writeln!(out, "Views: {}", stats.view_count);
                let _ = writeln!(out, "Likes: {}", stats.like_count);
                let _ = writeln!(out, "Dislikes: {}", stats.dislike_count);
            }
            None => {
                let _ = writeln!(out, "Video statistics not available");
            }
        }

        let _ = writeln!(out, "Comments:");
        for thread in &result.threads {
            push_comment(&mut out, &thread.top_level);

            if thread.replies.is_empty() {
                let _ = writeln!(out, "No replies found for this comment");
            } else {
                let _ = writeln!(out, "Replies:");
                for reply in &thread.replies {
                    push_comment(&mut out, reply);
                }
            }
            let _ = writeln!(out);
        }
    }

    if let Some(failure) = &result.failure {
        let _ = writeln!(
            out,
            "Channel '{}' (ID: {}): enrichment failed at {:?} stage: {}",
            result.candidate.title, result.candidate.id, failure.stage, failure.detail
        );
    }

    let _ = writeln!(out, "----------------------------");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AggregateResult, CandidateEntity, ChannelStatistics, CommentThread, EntityKind, Stage,
        StageFailure, VideoReport, VideoStatistics,
    };

    fn base_result() -> AggregateResult {
        AggregateResult::new(CandidateEntity {
            id: "UC1".to_string(),
            title: "Example Channel".to_string(),
            kind: EntityKind::Channel,
        })
    }

    fn comment(author: &str, text: &str) -> Comment {
        Comment {
            author: author.to_string(),
            text: text.to_string(),
            like_count: 0,
        }
    }

    #[test]
    fn renders_full_report() {
        let mut result = base_result();
        result.stats = Some(ChannelStatistics {
            subscriber_count: 100,
            video_count: 5,
            view_count: 1000,
        });
        result.video = Some(VideoReport {
            video_id: "V1".to_string(),
            duration_raw: "PT5M30S".to_string(),
            duration_display: "5M30S".to_string(),
            statistics: Some(VideoStatistics {
                view_count: 10,
                like_count: 2,
                dislike_count: 0,
            }),
        });
        result.threads = vec![
            CommentThread {
                top_level: comment("alice", "first!"),
                replies: vec![comment("bob", "hi alice")],
            },
            CommentThread {
                top_level: comment("carol", "nice"),
                replies: vec![],
            },
        ];

        let text = render(&result);

        assert!(text.contains(
            "Channel 'Example Channel' (ID: UC1) has 100 subscribers, 5 videos, and 1000 views"
        ));
        assert!(text.contains("Video ID: V1"));
        assert!(text.contains("Duration: 5M30S"));
        assert!(text.contains("Views: 10"));
        assert!(text.contains("Replies:\nAuthor: bob"));
        assert!(text.contains("No replies found for this comment"));
        assert!(text.ends_with("----------------------------\n"));
    }

    #[test]
    fn absent_video_statistics_are_marked() {
        let mut result = base_result();
        result.stats = Some(ChannelStatistics {
            subscriber_count: 1,
            video_count: 1,
            view_count: 1,
        });
        result.video = Some(VideoReport {
            video_id: "V1".to_string(),
            duration_raw: String::new(),
            duration_display: "Unknown".to_string(),
            statistics: None,
        });

        let text = render(&result);

        assert!(text.contains("Duration: Unknown"));
        assert!(text.contains("Video statistics not available"));
        assert!(!text.contains("Views:"));
    }

    #[test]
    fn failed_result_renders_partial_entry() {
        let mut result = base_result();
        result.failure = Some(StageFailure {
            stage: Stage::Stats,
            detail: "channel statistics not available".to_string(),
        });

        let text = render(&result);

        assert!(text.contains("enrichment failed at Stats stage"));
        assert!(!text.contains("subscribers"));
        assert!(!text.contains("Video ID"));
    }
}
