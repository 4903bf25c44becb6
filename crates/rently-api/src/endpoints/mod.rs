// Resource endpoints for the rental backend, one module per REST
// resource. All are inherent methods on `RentalClient`.

mod guests;
mod home_contracts;
mod home_owners;
mod homes;
mod invoice_payments;
mod receivers;
mod service_contracts;
mod services;
mod statistics;
mod users;
