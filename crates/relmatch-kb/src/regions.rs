//! Built-in Azure region table, keyed by the canonical ARM location name.

use crate::RegionRow;

pub(crate) static AZURE_REGIONS: &[RegionRow] = &[
    RegionRow { key: "eastus", display_name: "East US", aliases: &["East US", "eastus", "East US 1", "virginia", "eus"] },
    RegionRow { key: "eastus2", display_name: "East US 2", aliases: &["East US 2", "eastus2", "eus2", "virginia2"] },
    RegionRow { key: "westus", display_name: "West US", aliases: &["West US", "westus", "West US 1", "california", "wus"] },
    RegionRow { key: "westus2", display_name: "West US 2", aliases: &["West US 2", "westus2", "wus2", "washington"] },
    RegionRow { key: "westus3", display_name: "West US 3", aliases: &["West US 3", "westus3", "wus3", "phoenix"] },
    RegionRow { key: "centralus", display_name: "Central US", aliases: &["Central US", "centralus", "cus", "iowa"] },
    RegionRow { key: "northcentralus", display_name: "North Central US", aliases: &["North Central US", "northcentralus", "ncus", "illinois"] },
    RegionRow { key: "southcentralus", display_name: "South Central US", aliases: &["South Central US", "southcentralus", "scus", "texas"] },
    RegionRow { key: "westcentralus", display_name: "West Central US", aliases: &["West Central US", "westcentralus", "wcus", "wyoming"] },
    RegionRow { key: "canadacentral", display_name: "Canada Central", aliases: &["Canada Central", "canadacentral", "toronto", "canada central"] },
    RegionRow { key: "canadaeast", display_name: "Canada East", aliases: &["Canada East", "canadaeast", "quebec", "canada east"] },
    RegionRow { key: "mexicocentral", display_name: "Mexico Central", aliases: &["Mexico Central", "mexicocentral", "queretaro", "mexico central"] },
    RegionRow { key: "brazilsouth", display_name: "Brazil South", aliases: &["Brazil South", "brazilsouth", "sao paulo", "brazil south"] },
    RegionRow { key: "brazilsoutheast", display_name: "Brazil Southeast", aliases: &["Brazil Southeast", "brazilsoutheast", "rio", "brazil southeast"] },
    RegionRow { key: "chilecentral", display_name: "Chile Central", aliases: &["Chile Central", "chilecentral", "santiago", "chile central"] },
    RegionRow { key: "northeurope", display_name: "North Europe", aliases: &["North Europe", "northeurope", "ne", "neu", "ireland", "dublin"] },
    RegionRow { key: "westeurope", display_name: "West Europe", aliases: &["West Europe", "westeurope", "weu", "western europe", "netherlands", "amsterdam"] },
    RegionRow { key: "uksouth", display_name: "UK South", aliases: &["UK South", "uksouth", "united kingdom south", "london", "uk south"] },
    RegionRow { key: "ukwest", display_name: "UK West", aliases: &["UK West", "ukwest", "united kingdom west", "cardiff", "uk west"] },
    RegionRow { key: "francecentral", display_name: "France Central", aliases: &["France Central", "francecentral", "paris", "france central"] },
    RegionRow { key: "francesouth", display_name: "France South", aliases: &["France South", "francesouth", "marseille", "france south"] },
    RegionRow { key: "germanynorth", display_name: "Germany North", aliases: &["Germany North", "germanynorth", "berlin", "germany north"] },
    RegionRow { key: "germanywestcentral", display_name: "Germany West Central", aliases: &["Germany West Central", "germanywestcentral", "frankfurt", "germany west central"] },
    RegionRow { key: "switzerlandnorth", display_name: "Switzerland North", aliases: &["Switzerland North", "switzerlandnorth", "zurich", "switzerland north"] },
    RegionRow { key: "switzerlandwest", display_name: "Switzerland West", aliases: &["Switzerland West", "switzerlandwest", "geneva", "switzerland west"] },
    RegionRow { key: "austriaeast", display_name: "Austria East", aliases: &["Austria East", "austriaeast", "vienna", "austria east"] },
    RegionRow { key: "belgiumcentral", display_name: "Belgium Central", aliases: &["Belgium Central", "belgiumcentral", "brussels", "belgium central"] },
    RegionRow { key: "norwayeast", display_name: "Norway East", aliases: &["Norway East", "norwayeast", "oslo", "norway east"] },
    RegionRow { key: "norwaywest", display_name: "Norway West", aliases: &["Norway West", "norwaywest", "norway west"] },
    RegionRow { key: "swedencentral", display_name: "Sweden Central", aliases: &["Sweden Central", "swedencentral", "sdc", "se", "gavle", "gävle"] },
    RegionRow { key: "swedensouth", display_name: "Sweden South", aliases: &["Sweden South", "swedensouth", "sweden south"] },
    RegionRow { key: "polandcentral", display_name: "Poland Central", aliases: &["Poland Central", "polandcentral", "warsaw", "poland central"] },
    RegionRow { key: "italynorth", display_name: "Italy North", aliases: &["Italy North", "italynorth", "milan", "italy north"] },
    RegionRow { key: "spaincentral", display_name: "Spain Central", aliases: &["Spain Central", "spaincentral", "madrid", "spain central"] },
    RegionRow { key: "eastasia", display_name: "East Asia", aliases: &["East Asia", "eastasia", "hong kong", "hong kong sar", "hk"] },
    RegionRow { key: "southeastasia", display_name: "Southeast Asia", aliases: &["Southeast Asia", "southeastasia", "sea", "singapore", "sg"] },
    RegionRow { key: "japaneast", display_name: "Japan East", aliases: &["Japan East", "japaneast", "tokyo", "saitama", "japan east"] },
    RegionRow { key: "japanwest", display_name: "Japan West", aliases: &["Japan West", "japanwest", "osaka", "japan west"] },
    RegionRow { key: "koreacentral", display_name: "Korea Central", aliases: &["Korea Central", "koreacentral", "seoul", "korea central"] },
    RegionRow { key: "koreasouth", display_name: "Korea South", aliases: &["Korea South", "koreasouth", "busan", "korea south"] },
    RegionRow { key: "australiaeast", display_name: "Australia East", aliases: &["Australia East", "australiaeast", "new south wales", "sydney", "australia east"] },
    RegionRow { key: "australiasoutheast", display_name: "Australia Southeast", aliases: &["Australia Southeast", "australiasoutheast", "victoria", "melbourne", "australia southeast"] },
    RegionRow { key: "australiacentral", display_name: "Australia Central", aliases: &["Australia Central", "australiacentral", "canberra", "australia central"] },
    RegionRow { key: "australiacentral2", display_name: "Australia Central 2", aliases: &["Australia Central 2", "australiacentral2", "canberra2", "australia central 2"] },
    RegionRow { key: "newzealandnorth", display_name: "New Zealand North", aliases: &["New Zealand North", "newzealandnorth", "auckland", "new zealand north"] },
    RegionRow { key: "centralindia", display_name: "Central India", aliases: &["Central India", "centralindia", "pune", "central india"] },
    RegionRow { key: "southindia", display_name: "South India", aliases: &["South India", "southindia", "chennai", "south india"] },
    RegionRow { key: "westindia", display_name: "West India", aliases: &["West India", "westindia", "mumbai", "west india"] },
    RegionRow { key: "uaecentral", display_name: "UAE Central", aliases: &["UAE Central", "uaecentral", "abu dhabi", "uae central"] },
    RegionRow { key: "uaenorth", display_name: "UAE North", aliases: &["UAE North", "uaenorth", "dubai", "uae north"] },
    RegionRow { key: "qatarcentral", display_name: "Qatar Central", aliases: &["Qatar Central", "qatarcentral", "doha", "qatar central"] },
    RegionRow { key: "israelcentral", display_name: "Israel Central", aliases: &["Israel Central", "israelcentral", "israel central"] },
    RegionRow { key: "southafricanorth", display_name: "South Africa North", aliases: &["South Africa North", "southafricanorth", "johannesburg", "south africa north"] },
    RegionRow { key: "southafricawest", display_name: "South Africa West", aliases: &["South Africa West", "southafricawest", "cape town", "south africa west"] },
    RegionRow { key: "indonesiacentral", display_name: "Indonesia Central", aliases: &["Indonesia Central", "indonesiacentral", "jakarta", "indonesia central"] },
    RegionRow { key: "malaysiawest", display_name: "Malaysia West", aliases: &["Malaysia West", "malaysiawest", "malaysia west"] },
    RegionRow { key: "usgovvirginia", display_name: "US Gov Virginia", aliases: &["US Gov Virginia", "usgovvirginia", "usgov virginia", "gov virginia", "virginia gov"] },
    RegionRow { key: "usgovtexas", display_name: "US Gov Texas", aliases: &["US Gov Texas", "usgovtexas", "usgov texas", "gov texas", "texas gov"] },
    RegionRow { key: "usgovarizona", display_name: "US Gov Arizona", aliases: &["US Gov Arizona", "usgovarizona", "usgov arizona", "gov arizona", "arizona gov"] },
    RegionRow { key: "usdodeast", display_name: "US DoD East", aliases: &["US DoD East", "usdodeast", "dod east", "department of defense east"] },
    RegionRow { key: "usdodcentral", display_name: "US DoD Central", aliases: &["US DoD Central", "usdodcentral", "dod central", "department of defense central"] },
    RegionRow { key: "chinaeast", display_name: "China East", aliases: &["China East", "chinaeast", "china east"] },
    RegionRow { key: "chinaeast2", display_name: "China East 2", aliases: &["China East 2", "chinaeast2", "china east 2"] },
    RegionRow { key: "chinaeast3", display_name: "China East 3", aliases: &["China East 3", "chinaeast3", "china east 3"] },
    RegionRow { key: "chinanorth", display_name: "China North", aliases: &["China North", "chinanorth", "china north"] },
    RegionRow { key: "chinanorth2", display_name: "China North 2", aliases: &["China North 2", "chinanorth2", "china north 2"] },
    RegionRow { key: "chinanorth3", display_name: "China North 3", aliases: &["China North 3", "chinanorth3", "china north 3"] },
    RegionRow { key: "germanycentral", display_name: "Germany Central", aliases: &["Germany Central", "germanycentral", "germany central", "deutsche telekom"] },
    RegionRow { key: "germanynortheast", display_name: "Germany Northeast", aliases: &["Germany Northeast", "germanynortheast", "germany northeast"] },
    RegionRow { key: "global", display_name: "Global", aliases: &["Global", "global", "worldwide", "all regions", "multi-region"] },
];
