//! Form submission dispatch.
//!
//! Mirrors the browser-side helper in `public/select-form.js`: a submit
//! event may name an alternate submit control by element id, and the
//! submission is then routed through that control so its name/value pair
//! accompanies the form data.

/// The runtime's view of a form and the document around it.
///
/// The browser implements this with `getElementById` and
/// `requestSubmit`; tests use a recording fake.
pub trait FormHost {
    /// Handle to a submit control.
    type Control;

    /// Look up a submit control by element id.
    fn control(&self, id: &str) -> Option<Self::Control>;

    /// Request submission of the form, optionally through a designated
    /// submitter control.
    fn request_submit(&mut self, submitter: Option<Self::Control>);
}

/// Dispatch one submit event.
///
/// Without a submitter id the form is submitted plainly. With an id, the
/// control is looked up in the document; an id that matches nothing
/// degrades to a plain submission, the behavior of `requestSubmit(null)`.
pub fn trigger_submit<H: FormHost>(host: &mut H, submitter_id: Option<&str>) {
    match submitter_id {
        Some(id) => {
            let control = host.control(id);
            host.request_submit(control);
        }
        None => host.request_submit(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake document holding known control ids and recording every
    /// submission request.
    struct RecordingHost {
        known: Vec<&'static str>,
        submissions: Vec<Option<&'static str>>,
    }

    impl RecordingHost {
        fn with_controls(known: &[&'static str]) -> Self {
            Self {
                known: known.to_vec(),
                submissions: Vec::new(),
            }
        }
    }

    impl FormHost for RecordingHost {
        type Control = &'static str;

        fn control(&self, id: &str) -> Option<&'static str> {
            self.known.iter().copied().find(|known| *known == id)
        }

        fn request_submit(&mut self, submitter: Option<&'static str>) {
            self.submissions.push(submitter);
        }
    }

    #[test]
    fn test_no_submitter_submits_plainly_once() {
        let mut host = RecordingHost::with_controls(&["load-options"]);

        trigger_submit(&mut host, None);

        assert_eq!(host.submissions, [None]);
    }

    #[test]
    fn test_named_submitter_is_designated_once() {
        let mut host = RecordingHost::with_controls(&["load-options", "other"]);

        trigger_submit(&mut host, Some("load-options"));

        assert_eq!(host.submissions, [Some("load-options")]);
    }

    #[test]
    fn test_unresolvable_submitter_degrades_to_plain() {
        let mut host = RecordingHost::with_controls(&["load-options"]);

        trigger_submit(&mut host, Some("missing-button"));

        // Exactly one submission, with no designated control.
        assert_eq!(host.submissions, [None]);
    }
}
