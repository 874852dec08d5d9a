//! Built-in service alias table for Azure Resource Manager types.
//!
//! Entry order and alias order are significant: the first alias that matches
//! a release wins.

use crate::ServiceRow;

pub(crate) static AZURE_SERVICES: &[ServiceRow] = &[
    ServiceRow { resource_type: "microsoft.compute/virtualmachines", aliases: &["Virtual Machines", "VM", "Azure Virtual Machines", "Compute"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.compute/virtualmachinescalesets", aliases: &["Virtual Machine Scale Sets", "VMSS", "Scale Sets"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.compute/availabilitysets", aliases: &["Availability Sets", "Virtual Machines", "Compute"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.compute/disks", aliases: &["Managed Disks", "Azure Managed Disks", "Azure Disks", "Azure Disk Storage"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.batch/batchaccounts", aliases: &["Azure Batch", "Batch"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/virtualnetworks", aliases: &["Virtual Network", "VNet", "Networking"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/publicipaddresses", aliases: &["Public IP", "IP Address", "Networking"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/networkinterfaces", aliases: &["Network Interface", "NIC", "Networking"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.network/networksecuritygroups", aliases: &["Network Security Group", "NSG", "Security", "Networking"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/loadbalancers", aliases: &["Load Balancer", "Azure Load Balancer"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/applicationgateways", aliases: &["Application Gateway", "App Gateway", "Web Application Firewall", "Azure WAF"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/expressroutecircuits", aliases: &["ExpressRoute", "Express Route"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/vpngateways", aliases: &["VPN Gateway", "VPN"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/bastionhosts", aliases: &["Azure Bastion", "Bastion"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/frontdoors", aliases: &["Azure Front Door", "Front Door", "Web Application Firewall", "Azure WAF"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/frontdoorwebapplicationfirewallpolicies", aliases: &["Web Application Firewall", "Azure WAF", "WAF Policy"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/privatednszones", aliases: &["Private DNS", "DNS", "Azure DNS"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/routetables", aliases: &["Route Table", "Routing", "Networking"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.storage/storageaccounts", aliases: &["Storage Account", "Storage Accounts", "Azure Storage Account", "Azure Storage Accounts", "Azure Storage"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.storagesync/storagesyncservices", aliases: &["Azure File Sync", "File Sync"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.sql/servers", aliases: &["Azure SQL Database", "SQL Database", "Azure SQL", "Azure SQL Managed Instance", "Azure Synapse Analytics"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.sql/servers/databases", aliases: &["Azure SQL Database", "SQL Database", "Azure SQL", "Azure SQL Managed Instance", "Azure Synapse Analytics"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.sqlvirtualmachine/sqlvirtualmachines", aliases: &["SQL Server on Azure VMs", "SQL Server", "Virtual Machines"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.documentdb/databaseaccounts", aliases: &["Azure Cosmos DB", "Cosmos DB"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.cache/redis", aliases: &["Azure Cache for Redis", "Redis"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.dbformysql/servers", aliases: &["Azure Database for MySQL", "MySQL"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.dbforpostgresql/servers", aliases: &["Azure Database for PostgreSQL", "PostgreSQL"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.web/sites", aliases: &["Azure App Service", "App Service Web Apps"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.web/serverfarms", aliases: &["App Service Plan", "App Service"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.containerservice/managedclusters", aliases: &["Azure Kubernetes Service", "AKS", "Kubernetes"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.containerregistry/registries", aliases: &["Azure Container Registry", "Container Registry", "ACR"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.containerinstance/containergroups", aliases: &["Azure Container Instances", "Container Instances", "ACI"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.datafactory/factories", aliases: &["Azure Data Factory", "Data Factory", "ADF"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.databricks/workspaces", aliases: &["Azure Databricks", "Databricks"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.synapse/workspaces", aliases: &["Azure Synapse Analytics", "Synapse"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.operationalinsights/workspaces", aliases: &["Log Analytics", "Azure Monitor", "Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.cognitiveservices/accounts", aliases: &["Cognitive Services", "Azure AI", "AI Services"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.machinelearningservices/workspaces", aliases: &["Azure Machine Learning", "Machine Learning", "ML"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.autonomoussystems/workspaces", aliases: &["Microsoft Autonomous Systems", "Autonomous Systems"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.enterpriseknowledgegraph/services", aliases: &["Enterprise Knowledge Graph", "Knowledge Graph"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.keyvault/vaults", aliases: &["Azure Key Vault", "Key Vault"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.aad/domainservices", aliases: &["Azure Active Directory Domain Services", "Azure AD DS"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.insights/actiongroups", aliases: &["Azure Monitor", "Action Groups", "Monitor", "Alerts"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.insights/metricalerts", aliases: &["Azure Monitor", "Metric Alerts", "Monitor", "Alerts"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.insights/activitylogalerts", aliases: &["Azure Monitor", "Activity Log Alerts", "Monitor", "Alerts"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.alertsmanagement/alerts", aliases: &["Azure Monitor", "Alerts Management", "Monitor", "Alert Management"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.changeanalysis/profile", aliases: &["Azure Monitor", "Change Analysis", "Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.monitor/accounts", aliases: &["Azure Monitor", "Monitor", "Monitoring"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.workloadmonitor/monitors", aliases: &["Azure Monitor", "Workload Monitor", "Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.servicebus/namespaces", aliases: &["Azure Service Bus", "Service Bus"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.eventhub/namespaces", aliases: &["Azure Event Hubs", "Event Hubs"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.devices/iothubs", aliases: &["Azure IoT Hub", "IoT Hub", "IoT"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.media/mediaservices", aliases: &["Azure Media Services", "Media Services"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.recoveryservices/vaults", aliases: &["Azure Site Recovery", "Site Recovery", "Azure Backup", "Recovery Services"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.kusto/clusters", aliases: &["Azure Data Explorer", "Data Explorer", "ADX", "Kusto"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.hdinsight/clusters", aliases: &["Azure HDInsight", "HDInsight", "Hadoop", "Spark"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.streamanalytics/streamingjobs", aliases: &["Azure Stream Analytics", "Stream Analytics"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.powerbidedicated/capacities", aliases: &["Power BI Embedded", "Power BI"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.analysisservices/servers", aliases: &["Azure Analysis Services", "Analysis Services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datalakestore/accounts", aliases: &["Azure Data Lake Storage", "Data Lake Storage", "ADLS"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datashare/accounts", aliases: &["Azure Data Share", "Data Share"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.purview/accounts", aliases: &["Microsoft Purview", "Purview"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.apimanagement/service", aliases: &["Azure API Management", "API Management", "APIM"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.logic/workflows", aliases: &["Azure Logic Apps", "Logic Apps"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.eventgrid/topics", aliases: &["Azure Event Grid", "Event Grid"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.eventgrid/domains", aliases: &["Azure Event Grid", "Event Grid"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.notificationhubs/namespaces", aliases: &["Azure Notification Hubs", "Notification Hubs"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.relay/namespaces", aliases: &["Azure Relay", "Relay"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.communication/communicationservices", aliases: &["Azure Communication Services", "Communication Services"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.powerplatform/accounts", aliases: &["Microsoft Power Platform", "Power Platform"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.security/assessments", aliases: &["Microsoft Defender for Cloud", "Security Center", "Defender"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.securityinsights/workspaces", aliases: &["Microsoft Sentinel", "Azure Sentinel", "Sentinel"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.attestation/attestationproviders", aliases: &["Azure Attestation", "Attestation Service"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.hardwaresecuritymodules/dedicatedhsms", aliases: &["Azure Dedicated HSM", "Dedicated HSM"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.dataprotection/backupvaults", aliases: &["Azure Backup", "Data Protection", "Backup"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.customerlockbox/requests", aliases: &["Customer Lockbox", "Lockbox"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.windowsdefenderatp/diagnosticsettings", aliases: &["Microsoft Defender Advanced Threat Protection", "Defender ATP"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.windowsesu/multipleactivationkeys", aliases: &["Extended Security Updates", "Windows ESU"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.automation/automationaccounts", aliases: &["Azure Automation", "Automation", "Runbooks"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.addons/supportproviders", aliases: &["Azure Support", "Support Services"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.azurestack/registrations", aliases: &["Azure Stack", "Stack Registration"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.capacity/resourceproviders", aliases: &["Azure Capacity", "Capacity Management"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.marketplace/offers", aliases: &["Azure Marketplace", "Marketplace"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.marketplaceapps/classicdevservices", aliases: &["Azure Marketplace", "Marketplace Apps"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.marketplaceordering/agreements", aliases: &["Azure Marketplace", "Marketplace Ordering"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.saas/applications", aliases: &["Azure SaaS", "SaaS Applications"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.services/rollouts", aliases: &["Azure Services", "Service Rollouts"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.subscription/subscriptions", aliases: &["Azure Subscription", "Subscription Management"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.support/supporttickets", aliases: &["Azure Support", "Support Tickets"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.advisor/recommendations", aliases: &["Azure Advisor", "Advisor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.blueprint/blueprints", aliases: &["Azure Blueprints", "Blueprints"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.policyinsights/policyevents", aliases: &["Azure Policy", "Policy"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.managedservices/registrationdefinitions", aliases: &["Azure Lighthouse", "Lighthouse", "Managed Services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.resourcehealth/events", aliases: &["Azure Service Health", "Service Health", "Resource Health"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.resourcegraph/queries", aliases: &["Azure Resource Graph", "Resource Graph"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.billing/billingaccounts", aliases: &["Azure Billing", "Cost Management and Billing", "Billing"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.consumption/usagedetails", aliases: &["Azure Cost Management", "Cost Management", "Usage Details"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.costmanagement/exports", aliases: &["Azure Cost Management", "Cost Management", "Cost Management Exports"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.scheduler/jobcollections", aliases: &["Azure Scheduler", "Scheduler"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.solutions/applications", aliases: &["Azure Managed Applications", "Managed Applications"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.app/containerapps", aliases: &["Azure Container Apps", "Container Apps", "ACA"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.app/managedenvironments", aliases: &["Azure Container Apps", "Container Apps Environment"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.redhatopenshift/openshiftclusters", aliases: &["Azure Red Hat OpenShift", "OpenShift", "ARO"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.appplatform/spring", aliases: &["Azure Spring Apps", "Spring Apps", "Spring Cloud"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.microservices4spring/apps", aliases: &["Azure Spring Apps", "Spring Apps", "Microservices"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.classiccompute/virtualmachines", aliases: &["Classic Virtual Machines", "Classic VM", "Virtual Machines"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.avs/privateclouds", aliases: &["Azure VMware Solution", "VMware Solution", "AVS"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.hanaonauzre/hanainstances", aliases: &["SAP HANA on Azure Large Instances", "SAP HANA", "HANA"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.desktopvirtualization/hostpools", aliases: &["Azure Virtual Desktop", "Virtual Desktop", "AVD", "Windows Virtual Desktop"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.servicefabric/clusters", aliases: &["Azure Service Fabric", "Service Fabric"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.devtestlab/labs", aliases: &["Azure DevTest Labs", "DevTest Labs"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.labservices/labs", aliases: &["Azure Lab Services", "Lab Services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.maintenance/maintenanceconfigurations", aliases: &["Azure Maintenance", "Maintenance Configurations"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.serialconsole/consoleservices", aliases: &["Azure Serial Console", "Serial Console"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.virtualmachineimages/imagetemplates", aliases: &["Azure Image Builder", "VM Image Builder"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.vmware/privateclouds", aliases: &["Azure VMware Solution", "VMware Solution"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.vmwarecloudsimple/virtualmachines", aliases: &["Azure VMware Solution by CloudSimple", "VMware CloudSimple"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.quantum/workspaces", aliases: &["Azure Quantum", "Quantum"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.dbformariadb/servers", aliases: &["Azure Database for MariaDB", "MariaDB"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.azuredata/sqlserverregistrations", aliases: &["SQL Server enabled by Azure Arc", "Azure Arc SQL"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.healthcareapis/services", aliases: &["Azure API for FHIR", "Healthcare APIs", "FHIR"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.healthcareapis/workspaces", aliases: &["Healthcare APIs", "FHIR", "Azure Health Data Services"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.cdn/profiles", aliases: &["Azure Content Delivery Network", "Azure CDN", "CDN"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.classicnetwork/virtualnetworks", aliases: &["Classic Virtual Network", "Classic VNet", "Networking"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.managednetwork/managednetworks", aliases: &["Managed Network", "PaaS Networking"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.peering/peerings", aliases: &["Azure Peering Service", "Peering Service"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/firewall", aliases: &["Azure Firewall", "Firewall"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/ddosprotectionplans", aliases: &["Azure DDoS Protection", "DDoS Protection"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.netapp/netappaccounts", aliases: &["Azure NetApp Files", "NetApp Files", "ANF"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.classicstorage/storageaccounts", aliases: &["Classic Storage", "Classic Storage Account"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.storagecache/caches", aliases: &["Azure HPC Cache", "HPC Cache"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.elasticsan/elasticsans", aliases: &["Azure Elastic SAN", "Elastic SAN"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.importexport/jobs", aliases: &["Azure Import/Export", "Import Export"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.storsimple/managers", aliases: &["Azure StorSimple", "StorSimple"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.hybriddata/datamanagers", aliases: &["Azure StorSimple", "StorSimple", "Hybrid Data Manager"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.objectstore/osnamespaces", aliases: &["Azure Object Store", "Object Store"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.signalrservice/signalr", aliases: &["Azure SignalR Service", "SignalR"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.maps/accounts", aliases: &["Azure Maps", "Maps"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.bingmaps/mapapis", aliases: &["Bing Maps", "Bing Maps API"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.certificateregistration/certificateorders", aliases: &["App Service Certificates", "SSL Certificates"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.domainregistration/domains", aliases: &["App Service Domains", "Custom Domains"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.botservice/botservices", aliases: &["Azure Bot Service", "Bot Service", "Bot Framework"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.search/searchservices", aliases: &["Azure AI Search", "Azure Cognitive Search", "Search Service"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.iotcentral/iotapps", aliases: &["Azure IoT Central", "IoT Central"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.digitaltwins/digitaltwinsinstances", aliases: &["Azure Digital Twins", "Digital Twins"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.timeseriesinsights/environments", aliases: &["Azure Time Series Insights", "Time Series Insights"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.deviceupdate/accounts", aliases: &["Device Update for IoT Hub", "Device Update"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.iotspaces/graph", aliases: &["Azure Digital Twins", "IoT Spaces"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.windowsiot/deviceservices", aliases: &["Windows 10 IoT Core Services", "Windows IoT"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.azureactivedirectory/b2cdirectories", aliases: &["Microsoft Entra ID B2C", "Azure AD B2C", "B2C"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.adhybridhealthservice/services", aliases: &["Microsoft Entra ID", "Azure Active Directory", "AAD Health Service"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.managedidentity/userassignedidentities", aliases: &["Managed Identity", "User Assigned Identity"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.token/stores", aliases: &["Token Service", "Tokens"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.appconfiguration/configurationstores", aliases: &["Azure App Configuration", "App Configuration"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.devcenter/devcenters", aliases: &["Microsoft Dev Box", "Dev Box"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.devspaces/controllers", aliases: &["Azure Dev Spaces", "Dev Spaces"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.loadtestservice/loadtests", aliases: &["Azure Load Testing", "Load Testing"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.notebooks/notebookproxies", aliases: &["Azure Notebooks", "Notebooks"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.visualstudio/account", aliases: &["Azure DevOps", "DevOps", "Visual Studio Team Services"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.vsonline/accounts", aliases: &["Azure DevOps", "DevOps"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.devopsinfrastructure/pools", aliases: &["Managed DevOps Pools", "DevOps Pools"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.migrate/projects", aliases: &["Azure Migrate", "Migrate"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.databox/jobs", aliases: &["Azure Data Box", "Data Box"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datamigration/services", aliases: &["Azure Database Migration Service", "Database Migration"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.databoxedge/databoxedgedevices", aliases: &["Azure Stack Edge", "Azure Data Box Edge", "Stack Edge"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.offazure/serversites", aliases: &["Azure Migrate", "Migrate Assessment"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.classicinfrastructuremigrate/classicinfrastructureresources", aliases: &["Classic Infrastructure Migration", "Azure Migration"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.hybridcompute/machines", aliases: &["Azure Arc-enabled servers", "Azure Arc servers", "Arc servers"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.kubernetes/connectedclusters", aliases: &["Azure Arc-enabled Kubernetes", "Arc-enabled Kubernetes"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.kubernetesconfiguration/extensions", aliases: &["Azure Arc-enabled Kubernetes", "Kubernetes Configuration"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.azurearcdata/datacontrollers", aliases: &["Azure Arc-enabled data services", "Arc data services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.azurestackhci/clusters", aliases: &["Azure Stack HCI", "Azure Local", "Stack HCI"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.edge/sites", aliases: &["Azure Arc site manager", "Arc Site Manager"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.blockchain/blockchainmembers", aliases: &["Azure Blockchain Service", "Blockchain"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.blockchaintokens/tokenservices", aliases: &["Azure Blockchain Tokens", "Blockchain Tokens"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.mobilenetwork/mobilenetworks", aliases: &["Azure Private 5G Core", "Private 5G Core"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.hybridnetwork/networkfunctions", aliases: &["Azure Network Function Manager", "Network Function Manager"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.authorization/policies", aliases: &["Azure Resource Manager", "Resource Manager", "ARM"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.features/features", aliases: &["Azure Resource Manager", "Feature Management"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.resources/deployments", aliases: &["Azure Resource Manager", "Resource Manager", "ARM"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.resources/resourcegroups", aliases: &["Azure Resource Manager", "Resource Groups"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.portal/dashboards", aliases: &["Azure Portal", "Portal"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.classicsubscription/operations", aliases: &["Classic Subscription", "Azure Subscription"], weight: 0.6 },
    ServiceRow { resource_type: "microsoft.costmanagementexports/exports", aliases: &["Azure Cost Management", "Cost Management Exports"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.customproviders/resourceproviders", aliases: &["Azure Custom Providers", "Custom Providers"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.dynamicslcs/lcsprojects", aliases: &["Dynamics Lifecycle Services", "LCS"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.guestconfiguration/guestconfigurationassignments", aliases: &["Azure Policy", "Guest Configuration"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.management/managementgroups", aliases: &["Azure Management Groups", "Management Groups"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.softwareplan/hybridusebenefits", aliases: &["Software Plan", "License Management"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.media/transforms", aliases: &["Azure Media Services", "Media Services", "Video Processing"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.media/liveevents", aliases: &["Azure Media Services", "Media Services", "Live Streaming"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.media/streamingendpoints", aliases: &["Azure Media Services", "Media Services", "Streaming"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.commerce/usageaggregates", aliases: &["Azure Commerce", "Usage Aggregates", "Billing"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.capacity/reservationorders", aliases: &["Azure Capacity", "Reserved Instances", "Reservations"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.network/trafficmanagerprofiles", aliases: &["Azure Traffic Manager", "Traffic Manager"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/networkwatchers", aliases: &["Azure Network Watcher", "Network Watcher"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/connections", aliases: &["VPN Gateway", "ExpressRoute", "Network Connection"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/localnetworkgateways", aliases: &["Local Network Gateway", "VPN Gateway"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/natgateways", aliases: &["Virtual Network NAT", "NAT Gateway"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/virtualnetworkgateways", aliases: &["Virtual Network Gateway", "VPN Gateway", "ExpressRoute Gateway"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/privateendpoints", aliases: &["Azure Private Link", "Private Endpoints"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/privatelinkservices", aliases: &["Azure Private Link", "Private Link Services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/virtualwans", aliases: &["Azure Virtual WAN", "Virtual WAN"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/virtualhubs", aliases: &["Azure Virtual WAN", "Virtual Hub"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/p2svpngateways", aliases: &["Azure Virtual WAN", "Point-to-Site VPN"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/vpnsites", aliases: &["Azure Virtual WAN", "VPN Sites"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/azurefirewalls", aliases: &["Azure Firewall", "Firewall"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.network/firewallpolicies", aliases: &["Azure Firewall", "Firewall Policy"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.mixedreality/spatialanchorsaccounts", aliases: &["Azure Spatial Anchors", "Mixed Reality"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.mixedreality/remoterendering", aliases: &["Azure Remote Rendering", "Mixed Reality"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.intune/diagnosticsettings", aliases: &["Microsoft Intune", "Device Management"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.operationsmanagement/solutions", aliases: &["Azure Monitor", "Operations Management"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.web/staticsites", aliases: &["Azure Static Web Apps", "Static Web Apps"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.web/hostingenvironments", aliases: &["App Service Environment", "ASE"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.web/certificates", aliases: &["App Service Certificates", "SSL Certificates"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.web/sites/functions", aliases: &["Azure Functions", "Function App"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.web/sites/slots", aliases: &["App Service Slots", "Deployment Slots"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.eventgrid/systemtopics", aliases: &["Azure Event Grid", "Event Grid System Topics"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.eventgrid/eventsubscriptions", aliases: &["Azure Event Grid", "Event Subscriptions"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.eventgrid/partnertopics", aliases: &["Azure Event Grid", "Partner Topics"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.eventgrid/partnernamespaces", aliases: &["Azure Event Grid", "Partner Namespaces"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.servicebus/namespaces/queues", aliases: &["Azure Service Bus", "Service Bus Queues"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.servicebus/namespaces/topics", aliases: &["Azure Service Bus", "Service Bus Topics"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.eventhub/namespaces/eventhubs", aliases: &["Azure Event Hubs", "Event Hubs"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.eventhub/clusters", aliases: &["Azure Event Hubs", "Event Hubs Clusters"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.batch/batchaccounts/pools", aliases: &["Azure Batch", "Batch Pools"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.batch/batchaccounts/jobs", aliases: &["Azure Batch", "Batch Jobs"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.cognitiveservices/accounts/deployments", aliases: &["Azure OpenAI Service", "OpenAI", "Cognitive Services"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.storage/storageaccounts/blobservices", aliases: &["Azure Blob Storage", "Blob Storage"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.storage/storageaccounts/fileservices", aliases: &["Azure Files", "File Storage"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.storage/storageaccounts/queueservices", aliases: &["Azure Queue Storage", "Queue Storage"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.storage/storageaccounts/tableservices", aliases: &["Azure Table Storage", "Table Storage"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.sql/servers/elasticpools", aliases: &["Azure SQL Database", "SQL Elastic Pool", "Elastic Pool"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.sql/managedinstances", aliases: &["Azure SQL Managed Instance", "SQL Managed Instance"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.sql/servers/firewallrules", aliases: &["Azure SQL Database", "SQL Firewall Rules"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.compute/snapshots", aliases: &["Azure Snapshots", "VM Snapshots", "Disk Snapshots"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.compute/images", aliases: &["VM Images", "Azure Images", "Virtual Machine Images"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.compute/galleries", aliases: &["Azure Compute Gallery", "Shared Image Gallery"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.compute/restorepointcollections", aliases: &["VM Restore Points", "Virtual Machine Restore Points"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.keyvault/vaults/secrets", aliases: &["Azure Key Vault", "Key Vault Secrets"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.keyvault/vaults/keys", aliases: &["Azure Key Vault", "Key Vault Keys"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.keyvault/vaults/certificates", aliases: &["Azure Key Vault", "Key Vault Certificates"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.keyvault/managedhsms", aliases: &["Azure Key Vault", "Managed HSM"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.insights/diagnosticsettings", aliases: &["Azure Monitor", "Diagnostic Settings", "Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.insights/logprofiles", aliases: &["Azure Monitor", "Activity Log", "Monitor"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.insights/webtests", aliases: &["Application Insights", "Web Tests", "Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.insights/components", aliases: &["Application Insights", "App Insights", "Monitor"], weight: 0.9 },
    ServiceRow { resource_type: "microsoft.insights/workbooks", aliases: &["Azure Monitor", "Workbooks", "Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.insights/datacollectionrules", aliases: &["Azure Monitor", "Data Collection Rules", "Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datafactory/factories/pipelines", aliases: &["Azure Data Factory", "Data Factory Pipelines", "ADF"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datafactory/factories/datasets", aliases: &["Azure Data Factory", "Data Factory Datasets", "ADF"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datafactory/factories/linkedservices", aliases: &["Azure Data Factory", "Data Factory Linked Services", "ADF"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.synapse/workspaces/sqlpools", aliases: &["Azure Synapse Analytics", "SQL Pools", "Synapse"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.synapse/workspaces/bigdatapools", aliases: &["Azure Synapse Analytics", "Apache Spark Pools", "Synapse"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.recoveryservices/vaults/backupjobs", aliases: &["Azure Backup", "Backup Jobs", "Recovery Services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.recoveryservices/vaults/backuppolicies", aliases: &["Azure Backup", "Backup Policies", "Recovery Services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.recoveryservices/vaults/replicationfabrics", aliases: &["Azure Site Recovery", "Site Recovery", "Recovery Services"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.logic/workflows/triggers", aliases: &["Azure Logic Apps", "Logic App Triggers"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.logic/workflows/actions", aliases: &["Azure Logic Apps", "Logic App Actions"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.logic/integrationaccounts", aliases: &["Azure Logic Apps", "Integration Accounts"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.apimanagement/service/apis", aliases: &["Azure API Management", "API Management APIs", "APIM"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.apimanagement/service/products", aliases: &["Azure API Management", "API Management Products", "APIM"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.apimanagement/service/policies", aliases: &["Azure API Management", "API Management Policies", "APIM"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.devtestlab/labs/virtualmachines", aliases: &["Azure DevTest Labs", "DevTest Lab VMs"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.devtestlab/labs/formulas", aliases: &["Azure DevTest Labs", "DevTest Lab Formulas"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.documentdb/databaseaccounts/sqldatabases", aliases: &["Azure Cosmos DB", "Cosmos DB SQL Database"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.documentdb/databaseaccounts/mongodbdatabases", aliases: &["Azure Cosmos DB", "Cosmos DB for MongoDB"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.documentdb/databaseaccounts/cassandrakeyspaces", aliases: &["Azure Cosmos DB", "Cosmos DB Cassandra"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.documentdb/databaseaccounts/gremlingraphs", aliases: &["Azure Cosmos DB", "Cosmos DB Gremlin"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.documentdb/databaseaccounts/tables", aliases: &["Azure Cosmos DB", "Cosmos DB Table"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.search/searchservices/indexes", aliases: &["Azure AI Search", "Search Indexes", "Cognitive Search"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.search/searchservices/indexers", aliases: &["Azure AI Search", "Search Indexers", "Cognitive Search"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.search/searchservices/datasources", aliases: &["Azure AI Search", "Search Data Sources", "Cognitive Search"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.hybridcompute/machines/extensions", aliases: &["Azure Arc-enabled servers", "Arc Server Extensions"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.kubernetes/connectedclusters/agents", aliases: &["Azure Arc-enabled Kubernetes", "Arc K8s Agents"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datacatalog/catalogs", aliases: &["Azure Data Catalog", "Data Catalog"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.datalakeanalytics/accounts", aliases: &["Azure Data Lake Analytics", "Data Lake Analytics"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.projectbabylon/accounts", aliases: &["Azure Data Catalog", "Project Babylon"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.powerbi/workspacecollections", aliases: &["Power BI", "Power BI Workspace Collections"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.edgemarketplace/offers", aliases: &["Edge Marketplace", "Marketplace"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.help/diagnostics", aliases: &["Azure Help", "Support"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.hybridconnectivity/endpoints", aliases: &["Azure Hybrid Connectivity", "Hybrid Connectivity"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.hybridcontainerservice/provisionedclusters", aliases: &["Azure Kubernetes Service", "Hybrid Container Service"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.operationalinsights/workspaces/tables", aliases: &["Log Analytics", "Log Analytics Tables", "Azure Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.operationalinsights/workspaces/datasources", aliases: &["Log Analytics", "Log Analytics Data Sources", "Azure Monitor"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.network/networkprofiles", aliases: &["Network Profiles", "Container Networking"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.network/serviceendpointpolicies", aliases: &["Service Endpoint Policies", "Virtual Network Service Endpoints"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.network/virtualnetworktaps", aliases: &["Virtual Network TAP", "Network TAP"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.network/networksecurityperimeters", aliases: &["Network Security Perimeters", "Security Perimeters"], weight: 0.7 },
    ServiceRow { resource_type: "microsoft.resources/templatespecs", aliases: &["Azure Resource Manager", "Template Specs", "ARM Templates"], weight: 0.8 },
    ServiceRow { resource_type: "microsoft.resources/deploymentscripts", aliases: &["Azure Resource Manager", "Deployment Scripts", "ARM Scripts"], weight: 0.8 },
];
