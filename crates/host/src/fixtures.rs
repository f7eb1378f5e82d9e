//! Demo catalog: the security-suite lineup the component was built around.

use anyhow::Result;
use storefront_catalog::{Badge, InMemoryCatalog, ProductRecord};
use storefront_core::{Currency, Money, ProductId};

pub fn security_lineup() -> Result<InMemoryCatalog> {
    Ok(InMemoryCatalog::new(vec![
        ProductRecord {
            id: ProductId::new("antivirus-plus")?,
            name: "Antivirus Plus".to_string(),
            tagline: "Essential protection for Windows".to_string(),
            description: "Lightweight, award-winning protection against viruses, \
                          malware and ransomware."
                .to_string(),
            price: Some(Money::from_major(19.99, Currency::usd())?),
            base_price: Some(3999),
            features: vec![
                "Real-time threat detection".to_string(),
                "Ransomware remediation".to_string(),
                "Web attack prevention".to_string(),
            ],
            badge: None,
            trial_url: Some("https://example.com/trial/antivirus-plus".to_string()),
        },
        ProductRecord {
            id: ProductId::new("internet-security")?,
            name: "Internet Security".to_string(),
            tagline: "Protection plus privacy tools".to_string(),
            description: "Adds firewall, parental controls and webcam protection."
                .to_string(),
            price: Some(Money::from_major(29.99, Currency::usd())?),
            base_price: Some(4999),
            features: vec![
                "Everything in Antivirus Plus".to_string(),
                "Privacy firewall".to_string(),
                "Parental controls".to_string(),
                "Webcam and microphone protection".to_string(),
            ],
            badge: Some(Badge::BestValue),
            trial_url: Some("https://example.com/trial/internet-security".to_string()),
        },
        ProductRecord {
            id: ProductId::new("total-security")?,
            name: "Total Security".to_string(),
            tagline: "All devices, one plan".to_string(),
            description: "Cross-platform protection for Windows, macOS, Android and iOS."
                .to_string(),
            price: Some(Money::from_major(34.99, Currency::usd())?),
            base_price: Some(5999),
            features: vec![
                "Everything in Internet Security".to_string(),
                "Device optimizer".to_string(),
                "Anti-theft for laptops".to_string(),
                "VPN (200 MB/day)".to_string(),
            ],
            badge: Some(Badge::Popular),
            trial_url: Some("https://example.com/trial/total-security".to_string()),
        },
        ProductRecord {
            id: ProductId::new("premium-security-individual")?,
            name: "Premium Security".to_string(),
            tagline: "Complete protection and unlimited VPN".to_string(),
            description: "Everything in Total Security plus unlimited VPN traffic and \
                          priority support."
                .to_string(),
            price: Some(Money::from_major(39.99, Currency::usd())?),
            base_price: Some(5999),
            features: vec![
                "Everything in Total Security".to_string(),
                "Unlimited VPN traffic".to_string(),
                "Priority support".to_string(),
            ],
            badge: None,
            trial_url: None,
        },
    ]))
}
