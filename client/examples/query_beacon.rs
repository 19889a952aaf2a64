use beacon_client::{BeaconAlleleRequest, BeaconClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("BEACON_URL").expect("BEACON_URL environment variable must be set");
    let client = BeaconClient::new(&url)?;

    println!("=== Beacon at {} ===\n", client.base_url());

    let beacon = client.get_beacon().await?;
    println!("Name: {}", beacon.name.as_deref().unwrap_or("-"));
    println!("API version: {}", beacon.api_version.as_deref().unwrap_or("-"));
    println!("Assemblies: {:?}\n", beacon.assembly_ids());

    let request = BeaconAlleleRequest::builder()
        .reference_name("1")
        .start(100)
        .reference_bases("A")
        .alternate_bases("T")
        .assembly_id("GRCh37")
        .include_dataset_responses(true)
        .build();

    let response = client.query_allele_get(&request).await?;
    println!("GET query exists: {:?}", response.exists);
    for dataset in &response.dataset_allele_responses {
        println!(
            "  {}: {:?}",
            dataset.dataset_id.as_deref().unwrap_or("?"),
            dataset.exists
        );
    }

    let response = client.query_allele_post(&request).await?;
    println!("POST query exists: {:?}\n", response.exists);

    // verbs a Beacon is expected to refuse
    match client.query_allele_delete().await {
        Ok(_) => println!("DELETE query was accepted"),
        Err(e) => println!("DELETE query: {:?}", e.status()),
    }
    match client.put_beacon().await {
        Ok(body) => println!("PUT . was accepted: {}", body.text()),
        Err(e) => println!("PUT .: {:?}", e.status()),
    }

    Ok(())
}
