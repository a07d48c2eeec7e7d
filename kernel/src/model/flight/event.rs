use derive_new::new;

#[derive(new, Debug)]
pub struct CreateFlight {
    pub flight_number: String,
}
