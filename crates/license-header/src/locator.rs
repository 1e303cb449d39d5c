//! Header location within the leading comments of a file

use crate::patterns::is_license_comment;
use shared_types::{Comment, CommentKind};

/// Indices of the comments forming the header candidate, inclusive.
///
/// `first == last` except for headers written as a run of line comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub first: usize,
    pub last: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    Pending,
    Found(usize),
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub candidate: Option<Candidate>,
    pub shebang: Option<usize>,
}

/// Find the license header candidate and the shebang.
///
/// The header must be the first comment after an optional shebang: any other
/// comment in front of it means there is no header, even if a matching
/// comment follows later. `line_run` holds the header lines a line-comment
/// candidate is matched against; it may span up to that many comments.
pub fn locate(comments: &[Comment], line_run: &[String]) -> Located {
    let mut search = Search::Pending;
    for (index, comment) in comments.iter().enumerate() {
        if is_license_comment(&comment.text) {
            search = Search::Found(index);
            break;
        }
        if !comment.is_shebang() {
            search = Search::Absent;
            break;
        }
    }

    let candidate = match search {
        Search::Found(first) => Some(Candidate {
            first,
            last: extend_line_run(comments, first, line_run),
        }),
        Search::Pending | Search::Absent => None,
    };

    Located {
        candidate,
        shebang: comments.iter().position(Comment::is_shebang),
    }
}

/// Extend a line-comment candidate over the comments on the following lines.
///
/// A comment only joins the run when it looks like part of the license or is
/// the header line expected at its position, so unrelated comments stay out
/// of the replaced text.
fn extend_line_run(comments: &[Comment], first: usize, line_run: &[String]) -> usize {
    let mut last = first;
    if comments[first].kind != CommentKind::Line {
        return last;
    }

    while let Some(expected_line) = line_run.get(last + 1 - first) {
        match comments.get(last + 1) {
            Some(next)
                if next.kind == CommentKind::Line
                    && next.start.line == comments[last].end.line + 1
                    && (is_license_comment(&next.text)
                        || next.text.trim_end() == expected_line.trim()) =>
            {
                last += 1;
            }
            _ => break,
        }
    }
    last
}
