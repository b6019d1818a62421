//! Proxy: a stand-in with the same interface that creates the real object
//! only when it is first needed.

use crate::core::Transcript;

pub trait Subject {
    fn request(&mut self, out: &mut Transcript);
}

#[derive(Clone, Debug, Default)]
pub struct RealSubject {
    handled: usize,
}

impl RealSubject {
    pub fn handled(&self) -> usize {
        self.handled
    }
}

impl Subject for RealSubject {
    fn request(&mut self, out: &mut Transcript) {
        self.handled += 1;
        out.line("RealSubject: Handling request.");
    }
}

/// Lazily-initialized proxy for a [`RealSubject`].
#[derive(Clone, Debug, Default)]
pub struct Proxy {
    real_subject: Option<RealSubject>,
}

impl Proxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.real_subject.is_some()
    }

    pub fn real_subject(&self) -> Option<&RealSubject> {
        self.real_subject.as_ref()
    }
}

impl Subject for Proxy {
    fn request(&mut self, out: &mut Transcript) {
        if self.real_subject.is_none() {
            tracing::debug!("proxy creating real subject");
            out.line("Proxy: Creating RealSubject instance.");
        }
        let real_subject = self.real_subject.get_or_insert_with(RealSubject::default);

        out.line("Proxy: Forwarding request to RealSubject.");
        real_subject.request(out);
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let mut proxy = Proxy::new();

    out.line("Client: Requesting through Proxy...");
    proxy.request(&mut out);

    out.line("Client: Requesting again...");
    proxy.request(&mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_starts_without_real_subject() {
        assert!(!Proxy::new().is_initialized());
    }

    #[test]
    fn first_request_creates_real_subject() {
        let mut proxy = Proxy::new();
        let mut out = Transcript::new();

        proxy.request(&mut out);

        assert!(proxy.is_initialized());
        assert_eq!(
            out.lines(),
            &[
                "Proxy: Creating RealSubject instance.",
                "Proxy: Forwarding request to RealSubject.",
                "RealSubject: Handling request.",
            ]
        );
    }

    #[test]
    fn later_requests_reuse_real_subject() {
        let mut proxy = Proxy::new();
        let mut out = Transcript::new();

        proxy.request(&mut out);
        proxy.request(&mut out);
        proxy.request(&mut out);

        let created = out
            .lines()
            .iter()
            .filter(|l| l.as_str() == "Proxy: Creating RealSubject instance.")
            .count();
        assert_eq!(created, 1);
        assert_eq!(proxy.real_subject().map(RealSubject::handled), Some(3));
    }
}
