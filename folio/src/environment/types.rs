use folio_core_contact_impl::{delivery::ContactDeliveryServiceImpl, ContactFeatureServiceImpl};
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_email_impl::EmailServiceImpl;
use folio_extern_impl::contact::ContactApiServiceImpl;

// API
pub type RestServer<Email = DefaultEmail> =
    folio_api_rest::RestServer<HealthFeature<Email>, ContactFeature<Email>>;

// Email
pub type DefaultEmail = EmailServiceImpl;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Core
pub type HealthFeature<Email = DefaultEmail> = HealthFeatureServiceImpl<Email>;
pub type ContactFeature<Email = DefaultEmail> = ContactFeatureServiceImpl<ContactDelivery<Email>>;
pub type ContactDelivery<Email = DefaultEmail> = ContactDeliveryServiceImpl<Email>;

// Form
pub type ContactForm = folio_form::ContactForm<ContactApi>;
