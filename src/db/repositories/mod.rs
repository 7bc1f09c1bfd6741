mod attractions;
mod labels;
mod notifications;
mod trips;
